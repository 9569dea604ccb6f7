use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// A deployable unit of an application, owned by a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: ComponentSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentSpec {
    pub project_name: String,
    /// Name of the [`crate::ComponentType`] this component instantiates.
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub auto_deploy: bool,
    /// Opaque, type-specific parameters. Validated by the component type's
    /// controller, not here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl Resource for Component {
    const KIND: &'static str = "Component";

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
