//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: resource service trait, aggregator, default in-memory wiring
//! - `routes/`: HTTP routes + handlers (one file per resource type)
//! - `dto.rs`: list envelope and raw query parameters
//! - `errors.rs`: consistent error responses and status mapping

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with the default in-memory service wiring.
/// Public entrypoint used by `main.rs` and the black-box tests.
pub fn build_app() -> Router {
    build_app_with(services::build_services())
}

/// Build the router around an explicit service wiring.
pub fn build_app_with(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/v1", routes::router())
        .layer(Extension(Arc::new(services)))
}
