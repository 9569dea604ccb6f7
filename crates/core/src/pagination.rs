//! List-pagination normalization.
//!
//! Raw client input (`limit`, `cursor` query parameters) is canonicalized
//! into [`ListOptions`] before it reaches a service, and a service's
//! [`PageResult`] is projected into the wire-level [`Pagination`] descriptor
//! on the way out. Cursors are opaque tokens: this layer never interprets
//! their contents.
//!
//! Normalization favors availability over strictness: out-of-range limits are
//! clamped, never rejected, so a client submitting an odd limit gets a
//! best-effort page instead of an error.

use serde::{Deserialize, Serialize};

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Canonical pagination options handed to a resource service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of items per page. Always in `[1, MAX_PAGE_SIZE]`.
    pub limit: i64,
    /// Opaque cursor from a previous response, if the client is resuming.
    pub cursor: Option<String>,
}

/// One page of items plus the cursor for the next page.
///
/// `next_cursor` is `Some` iff more items exist beyond this page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

/// Wire-level pagination descriptor carried in list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    /// Cursor for the next page; absent when the list is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Number of items in this page.
    pub count: usize,
}

/// Canonicalize raw client-supplied pagination parameters.
///
/// An absent limit becomes [`DEFAULT_PAGE_SIZE`]; a present one is clamped
/// into `[1, MAX_PAGE_SIZE]`. The cursor passes through opaquely, with an
/// empty string treated as absent. Total over its domain: never fails.
pub fn normalize_list_options(limit: Option<i64>, cursor: Option<String>) -> ListOptions {
    let limit = match limit {
        None => DEFAULT_PAGE_SIZE,
        Some(l) => l.clamp(1, MAX_PAGE_SIZE),
    };
    let cursor = cursor.filter(|c| !c.is_empty());
    ListOptions { limit, cursor }
}

/// Project a page result into its wire descriptor.
///
/// `None` in, `None` out: a service that has not implemented paging yet may
/// return no result, and the response simply omits the descriptor.
pub fn to_pagination<T>(result: Option<&PageResult<T>>) -> Option<Pagination> {
    result.map(|r| Pagination {
        next_cursor: r.next_cursor.clone(),
        count: r.items.len(),
    })
}
