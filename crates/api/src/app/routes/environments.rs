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
        .route("/", get(list_environments).post(create_environment))
        .route(
            "/:name",
            get(get_environment)
                .put(update_environment)
                .delete(delete_environment),
        )
}

pub async fn list_environments(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list environments");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.environments.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::Environment> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("environments", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_environment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::Environment>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, environment = %body.name, "create environment");

    if body.spec.data_plane_ref.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.dataPlaneRef is required",
        );
    }

    let mut environment = match convert::<_, domain::Environment>(&body) {
        Ok(env) => env,
        Err(e) => return errors::invalid_body(e),
    };
    environment.metadata.namespace = Some(namespace.clone());
    environment.clear_status();

    let created = match services.environments.create(&namespace, environment).await {
        Ok(env) => env,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Environment>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("environment", e),
    }
}

pub async fn update_environment(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
    body: Result<Json<wire::Environment>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, environment = %name, "update environment");

    if body.spec.data_plane_ref.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.dataPlaneRef is required",
        );
    }

    let mut environment = match convert::<_, domain::Environment>(&body) {
        Ok(env) => env,
        Err(e) => return errors::invalid_body(e),
    };
    // The path, not the body, decides which resource is replaced.
    environment.metadata.name = name;
    environment.metadata.namespace = Some(namespace.clone());
    environment.clear_status();

    let updated = match services.environments.update(&namespace, environment).await {
        Ok(env) => env,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Environment>(&updated) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("environment", e),
    }
}

pub async fn get_environment(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let environment = match services.environments.get(&namespace, &name).await {
        Ok(env) => env,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Environment>(&environment) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("environment", e),
    }
}

pub async fn delete_environment(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, environment = %name, "delete environment");
    match services.environments.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
