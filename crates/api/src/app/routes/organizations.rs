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

use crate::app::services::CLUSTER_SCOPE;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_organizations).post(create_organization))
        .route("/:name", get(get_organization).delete(delete_organization))
}

/// Organizations are cluster-scoped; there is no namespace in the path.
pub async fn list_organizations(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    tracing::debug!("list organizations");

    let opts = normalize_list_options(params.limit, params.cursor);

    let result = match services.organizations.list(CLUSTER_SCOPE, opts).await {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<wire::Organization> = match convert_list(&result.items) {
        Ok(items) => items,
        Err(e) => return errors::outbound_conversion_error("organizations", e),
    };

    let pagination = to_pagination(Some(&result));
    (StatusCode::OK, Json(dto::ListResponse { items, pagination })).into_response()
}

pub async fn create_organization(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<wire::Organization>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "a valid JSON request body is required",
        );
    };
    tracing::info!(organization = %body.name, "create organization");

    let mut org = match convert::<_, domain::Organization>(&body) {
        Ok(org) => org,
        Err(e) => return errors::invalid_body(e),
    };
    org.clear_status();

    let created = match services.organizations.create(CLUSTER_SCOPE, org).await {
        Ok(org) => org,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Organization>(&created) {
        Ok(body) => (StatusCode::CREATED, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("organization", e),
    }
}

pub async fn get_organization(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let org = match services.organizations.get(CLUSTER_SCOPE, &name).await {
        Ok(org) => org,
        Err(e) => return errors::service_error_to_response(e),
    };

    match convert::<_, wire::Organization>(&org) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::outbound_conversion_error("organization", e),
    }
}

pub async fn delete_organization(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    tracing::info!(organization = %name, "delete organization");
    match services.organizations.delete(CLUSTER_SCOPE, &name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
