use serde::{Deserialize, Serialize};

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// A deployment target (dev, staging, prod, ...) within a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: EnvironmentSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Data plane this environment schedules onto.
    pub data_plane_ref: String,
    pub is_production: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_prefix: Option<String>,
}

impl Resource for Environment {
    const KIND: &'static str = "Environment";

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
