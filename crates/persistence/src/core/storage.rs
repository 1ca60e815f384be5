//! Record storage trait.
//!
//! This module defines [`RecordStorage`], the paginated query executor a
//! repository runs compiled searches through.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{BackendError, StorageResult};
use crate::search::{Predicate, Searchable};
use crate::types::{Page, PageRequest};

use super::backend::{Backend, BackendCapability};

/// Capabilities a storage handle must advertise before a repository will
/// use it.
pub const REQUIRED_CAPABILITIES: &[BackendCapability] = &[
    BackendCapability::FilteredQuery,
    BackendCapability::OffsetPagination,
    BackendCapability::InsertReturning,
];

/// Paged filtered reads and bulk inserts over one record type.
///
/// # Paging
///
/// `fetch_page` returns the records matching the predicate, in a stable
/// engine-defined order, starting at [`PageRequest::offset`] and holding at
/// most [`PageRequest::limit`] records. `total` counts every matching record,
/// so it does not change with the page requested, including pages past the
/// end of the matching set.
///
/// # Errors
///
/// Engine failures come back as [`StorageError::Backend`](crate::error::StorageError::Backend)
/// and are not retried. A failed fetch returns no partial page.
///
/// # Example
///
/// ```ignore
/// use advocate_persistence::core::RecordStorage;
/// use advocate_persistence::search::Predicate;
/// use advocate_persistence::types::PageRequest;
///
/// async fn first_page<S: RecordStorage>(storage: &S) -> StorageResult<u64> {
///     let page = storage.fetch_page(&Predicate::Always, PageRequest::first(10)).await?;
///     Ok(page.total)
/// }
/// ```
#[async_trait]
pub trait RecordStorage: Backend {
    /// The stored record type.
    type Record: Searchable + Serialize + Send + Sync;

    /// A record before insertion.
    type NewRecord: Send;

    /// Returns one page of records matching `predicate`, plus the total match
    /// count.
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        page: PageRequest,
    ) -> StorageResult<Page<Self::Record>>;

    /// Inserts `records` and returns them as stored, in input order.
    async fn insert_many(&self, records: Vec<Self::NewRecord>) -> StorageResult<Vec<Self::Record>>;
}

/// Returns the first required capability `storage` lacks.
pub fn missing_capability<S: Backend + ?Sized>(storage: &S) -> Option<BackendCapability> {
    REQUIRED_CAPABILITIES
        .iter()
        .copied()
        .find(|capability| !storage.supports(*capability))
}

/// Fails with [`BackendError::UnsupportedCapability`] if `storage` lacks a
/// required capability.
pub fn require_capabilities<S: Backend + ?Sized>(storage: &S) -> Result<(), BackendError> {
    match missing_capability(storage) {
        Some(capability) => Err(BackendError::UnsupportedCapability {
            backend_name: storage.name().to_string(),
            capability: capability.to_string(),
        }),
        None => Ok(()),
    }
}
