//! `openchoreo-wire` — the JSON-over-HTTP shapes exposed to API clients.
//!
//! Wire types mirror the domain schema on shared fields (same serde names at
//! the same tree position) so the generic converter maps between the two
//! without per-type glue. Controller-owned `status` and internal labels are
//! deliberately not part of the wire schema; `uid` and `creationTimestamp`
//! appear read-only on responses and are ignored on create payloads.
//!
//! Every type carries container-level `#[serde(default)]`: an absent field
//! in a payload (or in the domain tree during conversion) is filled with its
//! default rather than rejected.

pub mod component;
pub mod environment;
pub mod release;
pub mod secret_reference;
pub mod workload;

pub use component::{Component, ComponentSpec, ComponentType, ComponentTypeSpec};
pub use environment::{Environment, EnvironmentSpec, Organization, OrganizationSpec};
pub use release::{ReleaseBinding, ReleaseBindingSpec};
pub use secret_reference::{SecretKeyRef, SecretReference, SecretReferenceSpec};
pub use workload::{Container, EnvVar, Workload, WorkloadEndpoint, WorkloadSpec};
