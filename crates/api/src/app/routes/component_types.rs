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
        .route("/", get(list_component_types).post(create_component_type))
        .route(
            "/:name",
            get(get_component_type)
                .put(update_component_type)
                .delete(delete_component_type),
        )
}

pub async fn list_component_types(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list component types");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.component_types.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::ComponentType> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("component types", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_component_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::ComponentType>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, component_type = %body.name, "create component type");

    if body.spec.workload_kind.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.workloadKind is required",
        );
    }

    let mut ct = match convert::<_, domain::ComponentType>(&body) {
        Ok(ct) => ct,
        Err(e) => return errors::invalid_body(e),
    };
    ct.metadata.namespace = Some(namespace.clone());
    ct.clear_status();

    let created = match services.component_types.create(&namespace, ct).await {
        Ok(ct) => ct,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ComponentType>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("component type", e),
    }
}

pub async fn update_component_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
    body: Result<Json<wire::ComponentType>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, component_type = %name, "update component type");

    if body.spec.workload_kind.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.workloadKind is required",
        );
    }

    let mut ct = match convert::<_, domain::ComponentType>(&body) {
        Ok(ct) => ct,
        Err(e) => return errors::invalid_body(e),
    };
    // The path, not the body, decides which resource is replaced.
    ct.metadata.name = name;
    ct.metadata.namespace = Some(namespace.clone());
    ct.clear_status();

    let updated = match services.component_types.update(&namespace, ct).await {
        Ok(ct) => ct,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ComponentType>(&updated) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("component type", e),
    }
}

pub async fn get_component_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let ct = match services.component_types.get(&namespace, &name).await {
        Ok(ct) => ct,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ComponentType>(&ct) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("component type", e),
    }
}

pub async fn delete_component_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, component_type = %name, "delete component type");
    match services.component_types.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
