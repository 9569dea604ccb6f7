//! Consistent JSON error responses and error-to-status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use openchoreo_core::{ConvertError, ServiceError};

/// Map a service error kind to its HTTP response.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        ServiceError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
        ServiceError::NotFound(kind) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{kind} not found"))
        }
        ServiceError::AlreadyExists(msg) => json_error(StatusCode::CONFLICT, "already_exists", msg),
        ServiceError::Internal(msg) => {
            tracing::error!(error = %msg, "service failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal server error",
            )
        }
    }
}

/// Inbound conversion failure: the request body does not fit the schema.
pub fn invalid_body(err: ConvertError) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        "bad_request",
        format!("invalid request body: {err}"),
    )
}

/// Outbound conversion failure: a service result cannot be represented on
/// the wire. That is schema drift, a bug; the client only sees a 500.
pub fn outbound_conversion_error(resource: &str, err: ConvertError) -> axum::response::Response {
    tracing::error!(resource, error = %err, "failed to convert service result to wire schema");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
