use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// A reusable template describing how components of this kind are rendered
/// onto the data plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentType {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: ComponentTypeSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentTypeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workload kind components of this type materialize as
    /// (e.g. "Deployment", "StatefulSet", "CronJob").
    pub workload_kind: String,
    /// JSON-schema-like description of the parameters a component of this
    /// type accepts. Opaque to the control plane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_schema: Option<Value>,
}

impl Resource for ComponentType {
    const KIND: &'static str = "ComponentType";

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
