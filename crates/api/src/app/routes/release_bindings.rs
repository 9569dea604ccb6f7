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
        .route("/", get(list_release_bindings).post(create_release_binding))
        .route(
            "/:name",
            get(get_release_binding)
                .put(update_release_binding)
                .delete(delete_release_binding),
        )
}

pub async fn list_release_bindings(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list release bindings");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.release_bindings.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::ReleaseBinding> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("release bindings", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_release_binding(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::ReleaseBinding>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, release_binding = %body.name, "create release binding");

    if body.spec.component_name.is_empty() || body.spec.environment.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.componentName and spec.environment are required",
        );
    }

    // An unknown releaseState string fails the inbound conversion here and
    // surfaces as a 400, not a 500.
    let mut binding = match convert::<_, domain::ReleaseBinding>(&body) {
        Ok(b) => b,
        Err(e) => return errors::invalid_body(e),
    };
    binding.metadata.namespace = Some(namespace.clone());
    binding.clear_status();

    let created = match services.release_bindings.create(&namespace, binding).await {
        Ok(b) => b,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ReleaseBinding>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("release binding", e),
    }
}

pub async fn update_release_binding(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
    body: Result<Json<wire::ReleaseBinding>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, release_binding = %name, "update release binding");

    if body.spec.component_name.is_empty() || body.spec.environment.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.componentName and spec.environment are required",
        );
    }

    let mut binding = match convert::<_, domain::ReleaseBinding>(&body) {
        Ok(b) => b,
        Err(e) => return errors::invalid_body(e),
    };
    // The path, not the body, decides which resource is replaced.
    binding.metadata.name = name;
    binding.metadata.namespace = Some(namespace.clone());
    binding.clear_status();

    let updated = match services.release_bindings.update(&namespace, binding).await {
        Ok(b) => b,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ReleaseBinding>(&updated) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("release binding", e),
    }
}

pub async fn get_release_binding(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let binding = match services.release_bindings.get(&namespace, &name).await {
        Ok(b) => b,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::ReleaseBinding>(&binding) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("release binding", e),
    }
}

pub async fn delete_release_binding(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, release_binding = %name, "delete release binding");
    match services.release_bindings.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
