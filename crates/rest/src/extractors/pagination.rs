//! Pagination extractor.
//!
//! Reads `page` and `pageSize` from the query string. Values are read the
//! way browsers read a leading integer: surrounding text after the digits is
//! ignored, so `2abc` and `2.5` both mean 2. A missing or empty value falls
//! back to page 1 and the configured default page size.

use advocate_persistence::core::RecordStorage;
use advocate_persistence::types::PageRequest;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use tracing::warn;

use crate::error::RestError;
use crate::state::AppState;

/// Query parameters for pagination.
#[derive(Debug, Default, Deserialize)]
struct PaginationQuery {
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and one sign character are accepted. Returns `None`
/// when no digit follows, or the value does not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Resolves one pagination value. An absent or empty value takes `default`;
/// anything else must parse to an integer in `1..=u32::MAX`.
fn resolve(raw: Option<&str>, default: u32) -> Option<u32> {
    match raw {
        None | Some("") => Some(default),
        Some(value) => parse_leading_int(value)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok()),
    }
}

/// Extractor for `page` and `pageSize`.
///
/// Rejects the request with [`RestError::InvalidPagination`] when either
/// value is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PageRequest);

impl Pagination {
    /// Builds a pagination value from raw query values.
    pub fn from_raw(
        page: Option<&str>,
        page_size: Option<&str>,
        default_page_size: u32,
    ) -> Result<Self, RestError> {
        let page_number = resolve(page, 1);
        let size = resolve(page_size, default_page_size);

        match (page_number, size) {
            (Some(page_number), Some(size)) => Ok(Self(PageRequest::new(page_number, size))),
            _ => {
                warn!(?page, ?page_size, "Rejected pagination parameters");
                Err(RestError::InvalidPagination)
            }
        }
    }

    /// Returns the page request.
    pub fn page_request(&self) -> PageRequest {
        self.0
    }
}

impl<S> FromRequestParts<AppState<S>> for Pagination
where
    S: RecordStorage + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::InvalidPagination)?;

        Self::from_raw(
            query.page.as_deref(),
            query.page_size.as_deref(),
            state.default_page_size(),
        )
    }
}
