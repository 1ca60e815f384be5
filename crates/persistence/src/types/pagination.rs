//! Pagination types for directory listings.
//!
//! Pages are addressed by a 1-based page number and a page size. Validating
//! that both are positive is the caller's job; [`PageRequest::offset`] treats
//! page 0 like page 1 rather than underflowing.

use serde::{Deserialize, Serialize};

/// A request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// The 1-based page number.
    pub page: u32,
    /// Maximum number of records on the page.
    pub page_size: u32,
}

impl PageRequest {
    /// Creates a page request.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Creates a request for the first page.
    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// Number of matching records to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of records to take.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(10)
    }
}

/// One page of matching records plus the size of the whole matching set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records on this page, at most `page_size` of them.
    pub data: Vec<T>,
    /// Number of records matching the predicate, regardless of paging.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(data: Vec<T>, total: u64) -> Self {
        Self { data, total }
    }

    /// Creates an empty page with no matches.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }

    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of pages of `page_size` needed to cover `total`.
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
