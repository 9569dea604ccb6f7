use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Wire shape of a release binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseBinding {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub spec: ReleaseBindingSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseBindingSpec {
    pub component_name: String,
    pub environment: String,
    /// "Active", "Suspended" or "Undeployed"; mirrors the domain enum by
    /// serialized name.
    pub release_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Value>,
}

impl Default for ReleaseBindingSpec {
    fn default() -> Self {
        Self {
            component_name: String::new(),
            environment: String::new(),
            release_state: "Active".to_string(),
            overrides: None,
        }
    }
}
