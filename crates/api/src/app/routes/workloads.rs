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
        .route("/", get(list_workloads).post(create_workload))
        .route(
            "/:name",
            get(get_workload).put(update_workload).delete(delete_workload),
        )
}

pub async fn list_workloads(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list workloads");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.workloads.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::Workload> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("workloads", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_workload(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::Workload>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, workload = %body.name, "create workload");

    if body.spec.component_name.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.componentName is required",
        );
    }

    let mut workload = match convert::<_, domain::Workload>(&body) {
        Ok(w) => w,
        Err(e) => return errors::invalid_body(e),
    };
    workload.metadata.namespace = Some(namespace.clone());
    workload.clear_status();

    let created = match services.workloads.create(&namespace, workload).await {
        Ok(w) => w,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Workload>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("workload", e),
    }
}

pub async fn update_workload(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
    body: Result<Json<wire::Workload>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, workload = %name, "update workload");

    if body.spec.component_name.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.componentName is required",
        );
    }

    let mut workload = match convert::<_, domain::Workload>(&body) {
        Ok(w) => w,
        Err(e) => return errors::invalid_body(e),
    };
    // The path, not the body, decides which resource is replaced.
    workload.metadata.name = name;
    workload.metadata.namespace = Some(namespace.clone());
    workload.clear_status();

    let updated = match services.workloads.update(&namespace, workload).await {
        Ok(w) => w,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Workload>(&updated) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("workload", e),
    }
}

pub async fn get_workload(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let workload = match services.workloads.get(&namespace, &name).await {
        Ok(w) => w,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Workload>(&workload) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("workload", e),
    }
}

pub async fn delete_workload(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, workload = %name, "delete workload");
    match services.workloads.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
