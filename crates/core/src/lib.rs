//! `openchoreo-core` — shared building blocks for the control-plane API.
//!
//! This crate contains the two pieces that must be correct across every
//! resource type the API exposes: the generic wire/domain converter and the
//! list-pagination normalizer. It also defines the closed error-kind set
//! reported by resource services. No HTTP, no I/O, no resource-specific code.

pub mod convert;
pub mod error;
pub mod pagination;

pub use convert::{ConvertError, convert, convert_list};
pub use error::{ServiceError, ServiceResult};
pub use pagination::{
    DEFAULT_PAGE_SIZE, ListOptions, MAX_PAGE_SIZE, PageResult, Pagination, normalize_list_options,
    to_pagination,
};
