//! `openchoreo-domain` — internal resource representations.
//!
//! These are the custom-resource-like shapes the service layer works with.
//! They mirror the wire schema on shared fields but additionally carry
//! system-managed metadata (`uid`, `creationTimestamp`, labels) and `status`,
//! none of which survive a wire round-trip.

pub mod component;
pub mod component_type;
pub mod environment;
pub mod meta;
pub mod organization;
pub mod release_binding;
pub mod secret_reference;
pub mod workload;

pub use component::{Component, ComponentSpec};
pub use component_type::{ComponentType, ComponentTypeSpec};
pub use environment::{Environment, EnvironmentSpec};
pub use meta::{Phase, Resource, ResourceMeta, ResourceStatus};
pub use organization::{Organization, OrganizationSpec};
pub use release_binding::{ReleaseBinding, ReleaseBindingSpec, ReleaseState};
pub use secret_reference::{SecretKeyRef, SecretReference, SecretReferenceSpec};
pub use workload::{Container, EnvVar, Workload, WorkloadEndpoint, WorkloadSpec};
