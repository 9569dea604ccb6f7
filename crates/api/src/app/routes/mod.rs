use axum::Router;

pub mod component_types;
pub mod components;
pub mod environments;
pub mod organizations;
pub mod release_bindings;
pub mod secret_references;
pub mod system;
pub mod workloads;

/// Router for everything under `/api/v1`.
pub fn router() -> Router {
    let namespaced = Router::new()
        .nest("/components", components::router())
        .nest("/componenttypes", component_types::router())
        .nest("/workloads", workloads::router())
        .nest("/releasebindings", release_bindings::router())
        .nest("/environments", environments::router())
        .nest("/secretreferences", secret_references::router());

    Router::new()
        .nest("/namespaces/:namespace", namespaced)
        .nest("/organizations", organizations::router())
}
