use axum::Json;
use axum::response::IntoResponse;

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}
