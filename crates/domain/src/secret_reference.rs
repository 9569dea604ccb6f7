use serde::{Deserialize, Serialize};

use crate::meta::{Resource, ResourceMeta, ResourceStatus};

/// A pointer to secret material held in an external secret store. The
/// control plane never sees the secret values themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretReference {
    #[serde(flatten)]
    pub metadata: ResourceMeta,
    pub spec: SecretReferenceSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretReferenceSpec {
    /// External store the keys resolve against (e.g. a vault instance name).
    pub secret_store: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<SecretKeyRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretKeyRef {
    /// Key name as surfaced to workloads.
    pub name: String,
    /// Path/key of the secret in the external store.
    pub remote_ref: String,
}

impl Resource for SecretReference {
    const KIND: &'static str = "SecretReference";

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
