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
        .route("/", get(list_secret_references).post(create_secret_reference))
        .route(
            "/:name",
            get(get_secret_reference)
                .put(update_secret_reference)
                .delete(delete_secret_reference),
        )
}

pub async fn list_secret_references(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!(%namespace, "list secret references");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.secret_references.list(&namespace, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::SecretReference> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("secret references", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_secret_reference(
    Extension(services): Extension<Arc<AppServices>>,
    Path(namespace): Path<String>,
    body: Result<Json<wire::SecretReference>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, secret_reference = %body.name, "create secret reference");

    if body.spec.secret_store.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.secretStore is required",
        );
    }

    let mut sr = match convert::<_, domain::SecretReference>(&body) {
        Ok(sr) => sr,
        Err(e) => return errors::invalid_body(e),
    };
    sr.metadata.namespace = Some(namespace.clone());
    sr.clear_status();

    let created = match services.secret_references.create(&namespace, sr).await {
        Ok(sr) => sr,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::SecretReference>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("secret reference", e),
    }
}

pub async fn update_secret_reference(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
    body: Result<Json<wire::SecretReference>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(%namespace, secret_reference = %name, "update secret reference");

    if body.spec.secret_store.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "spec.secretStore is required",
        );
    }

    let mut sr = match convert::<_, domain::SecretReference>(&body) {
        Ok(sr) => sr,
        Err(e) => return errors::invalid_body(e),
    };
    // The path, not the body, decides which resource is replaced.
    sr.metadata.name = name;
    sr.metadata.namespace = Some(namespace.clone());
    sr.clear_status();

    let updated = match services.secret_references.update(&namespace, sr).await {
        Ok(sr) => sr,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::SecretReference>(&updated) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("secret reference", e),
    }
}

pub async fn get_secret_reference(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    let sr = match services.secret_references.get(&namespace, &name).await {
        Ok(sr) => sr,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::SecretReference>(&sr) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("secret reference", e),
    }
}

pub async fn delete_secret_reference(
    Extension(services): Extension<Arc<AppServices>>,
    Path((namespace, name)): Path<(String, String)>,
) -> axum::response::Response {
    tracing::info!(%namespace, secret_reference = %name, "delete secret reference");
    match services.secret_references.delete(&namespace, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
