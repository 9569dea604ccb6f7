use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// Binds a component's release to an environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseBinding {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: ReleaseBindingSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseBindingSpec {
    pub component_name: String,
    pub environment: String,
    pub release_state: ReleaseState,
    /// Environment-specific overrides applied on top of the component's
    /// parameters. Opaque here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Value>,
}

/// Desired deployment state of the bound release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseState {
    #[default]
    Active,
    Suspended,
    Undeployed,
}

impl Resource for ReleaseBinding {
    const KIND: &'static str = "ReleaseBinding";

    fn metadata(&self) -> &ResourceMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ResourceMeta {
        &mut self.metadata
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
