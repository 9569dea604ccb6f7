//! Service error model.
//!
//! Resource services report failures through this closed kind set; the HTTP
//! layer maps each kind to a status code (400/403/404/409/500). Keep this
//! focused on the outcomes a caller can act on — anything else is `Internal`.

use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error kinds a resource service may report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was malformed or failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The caller is not allowed to perform the operation. The decision is
    /// made elsewhere (authz service); this layer only carries the verdict.
    #[error("forbidden")]
    Forbidden,

    /// The named resource kind does not exist in the requested scope.
    #[error("{0} not found")]
    NotFound(String),

    /// A resource with the same identity already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// An unexpected failure in the service or its backing store.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: impl Into<String>) -> Self {
        Self::NotFound(kind.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_resource_kind() {
        let err = ServiceError::not_found("Component");
        assert_eq!(err.to_string(), "Component not found");
    }

    #[test]
    fn helpers_build_expected_kinds() {
        assert!(matches!(
            ServiceError::validation("bad limit"),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            ServiceError::already_exists("component exists"),
            ServiceError::AlreadyExists(_)
        ));
    }
}
