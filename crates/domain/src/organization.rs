use serde::{Deserialize, Serialize};

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// Top-level tenancy unit. Cluster-scoped: carries no namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: OrganizationSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Organization {
    const KIND: &'static str = "Organization";

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
