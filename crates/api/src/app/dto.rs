//! Shared request/response envelope pieces.

use serde::{Deserialize, Serialize};

use openchoreo_core::Pagination;

/// Raw pagination query parameters, exactly as the client sent them.
/// Normalized by `openchoreo_core::normalize_list_options` before use.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

/// Standard list response envelope.
///
/// `pagination` is omitted entirely for services that do not page yet.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}
