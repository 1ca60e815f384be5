//! Directory listing handler.

use advocate_persistence::core::RecordStorage;
use advocate_persistence::types::Page;
use axum::{Json, extract::State};
use serde::Serialize;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{Pagination, SearchTerm};
use crate::state::AppState;

/// Paging metadata returned alongside each page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Records matching the search, across all pages.
    pub total_advocates: u64,
    /// `ceil(total_advocates / page_size)`.
    pub total_pages: u64,
    /// The requested page number.
    pub current_page: u32,
    /// The requested page size.
    pub page_size: u32,
}

/// Body of `GET /api/advocates`.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocatesResponse<T> {
    /// Records on the requested page.
    pub data: Vec<T>,
    /// Paging metadata.
    pub meta: PaginationMeta,
}

impl<T> AdvocatesResponse<T> {
    /// Builds the response body for `page`.
    pub fn new(page: Page<T>, current_page: u32, page_size: u32) -> Self {
        let meta = PaginationMeta {
            total_advocates: page.total,
            total_pages: page.total_pages(page_size),
            current_page,
            page_size,
        };
        Self {
            data: page.data,
            meta,
        }
    }
}

/// Handler for listing and searching advocates.
///
/// # HTTP Request
///
/// `GET /api/advocates?page=[n]&pageSize=[n]&searchTerm=[term]`
///
/// # Response
///
/// - `200 OK` - One page of matching advocates with paging metadata
/// - `400 Bad Request` - `page` or `pageSize` is not a positive integer
/// - `500 Internal Server Error` - The storage engine failed
pub async fn list_advocates_handler<S>(
    State(state): State<AppState<S>>,
    Pagination(page): Pagination,
    search_term: SearchTerm,
) -> RestResult<Json<AdvocatesResponse<S::Record>>>
where
    S: RecordStorage + 'static,
{
    debug!(
        page = page.page,
        page_size = page.page_size,
        search_term = search_term.as_deref(),
        "Processing advocate list request"
    );

    let result = state
        .repository()
        .get_all(page, search_term.as_deref())
        .await?;

    Ok(Json(AdvocatesResponse::new(
        result,
        page.page,
        page.page_size,
    )))
}
