use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use openchoreo_core::{convert, convert_list, normalize_list_options, to_pagination};
use openchoreo_domain as domain;
use openchoreo_domain::Resource as _;
use openchoreo_wire as wire;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_components).post(create_component))
        .route("/:name", get(get_component).delete(delete_component))
}

/// Paginated list of components within a namespace.
pub async fn list_components(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list components");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.components.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::Component> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("components", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_component(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::Component>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, component = %body.name, "create component");

    if body.spec.component_type.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.type is required",
        );
    }

    let mut component = match convert::<_, domain::Component>(&body) {
        Ok(c) => c,
        Err(e) => return errors::invalid_body(e),
    };
    // Identity comes from the request path; status is controller-owned and
    // never accepted from the client.
    component.metadata.namespace = Some(namespace.clone());
    component.clear_status();

    let created = match services.components.create(&namespace, component).await {
        Ok(c) => c,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Component>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("component", e),
    }
}

pub async fn get_component(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let component = match services.components.get(&namespace, &name).await {
        Ok(c) => c,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Component>(&component) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("component", e),
    }
}

pub async fn delete_component(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, component = %name, "delete component");
    match services.components.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
