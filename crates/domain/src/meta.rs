//! System-managed metadata shared by every domain resource.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity plus server-assigned metadata for a resource.
///
/// Flattened into the resource's JSON shape, so `name`/`namespace` line up
/// with the wire schema's top-level fields and transfer through the generic
/// converter. `uid`, `creationTimestamp` and `labels` are assigned by the
/// store and deliberately absent from create payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ResourceMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Reconciliation phase reported by the controllers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Controller-owned status. Never accepted from clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStatus {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Common surface of every domain resource, used by the generic service and
/// store plumbing.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in error messages ("Component not found").
    const KIND: &'static str;

    fn metadata(&self) -> &ResourceMeta;
    fn metadata_mut(&mut self) -> &mut ResourceMeta;

    /// Drop controller-owned status, e.g. on inbound create payloads.
    fn clear_status(&mut self);
}
