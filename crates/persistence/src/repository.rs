//! Search repository.
//!
//! A [`Repository`] binds a storage handle to a fixed [`FieldSet`] and runs
//! raw search terms through parse, compile and fetch.

use std::sync::Arc;

use tracing::debug;

use crate::core::{RecordStorage, require_capabilities};
use crate::error::StorageResult;
use crate::search::{ADVOCATE_FIELDS, FieldSet, Predicate, compile, parse};
use crate::types::{Page, PageRequest};

/// Paged search and bulk insert over one record type.
#[derive(Debug)]
pub struct Repository<S: RecordStorage> {
    storage: Arc<S>,
    fields: FieldSet,
}

impl<S: RecordStorage> Clone for Repository<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            fields: self.fields,
        }
    }
}

/// Repository over the advocate directory.
pub type AdvocateRepository<S> = Repository<S>;

impl<S: RecordStorage> Repository<S> {
    /// Creates a repository.
    ///
    /// Fails with [`BackendError::UnsupportedCapability`](crate::error::BackendError::UnsupportedCapability)
    /// if `storage` cannot run filtered queries, page with an offset, or
    /// return inserted rows.
    pub fn new(storage: Arc<S>, fields: FieldSet) -> StorageResult<Self> {
        require_capabilities(storage.as_ref())?;
        Ok(Self { storage, fields })
    }

    /// Creates a repository searching [`ADVOCATE_FIELDS`].
    pub fn advocates(storage: Arc<S>) -> StorageResult<Self> {
        Self::new(storage, ADVOCATE_FIELDS)
    }

    /// Returns the storage handle.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Returns the searched fields.
    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    /// Compiles a raw search term. An absent term matches everything.
    pub fn predicate(&self, search_term: Option<&str>) -> Predicate {
        match search_term {
            None => Predicate::Always,
            Some(raw) => {
                let query = parse(raw);
                debug!(
                    search_term = raw,
                    query = %serde_json::to_string(&query).unwrap_or_default(),
                    "Parsed search term"
                );
                compile(&query, &self.fields)
            }
        }
    }

    /// Returns one page of records matching `search_term`, plus the total
    /// match count. Engine errors are returned as-is.
    pub async fn get_all(
        &self,
        page: PageRequest,
        search_term: Option<&str>,
    ) -> StorageResult<Page<S::Record>> {
        let predicate = self.predicate(search_term);

        debug!(
            page = page.page,
            page_size = page.page_size,
            offset = page.offset(),
            match_all = predicate.is_always(),
            "Fetching page"
        );

        let result = self.storage.fetch_page(&predicate, page).await?;

        debug!(
            returned = result.len(),
            total = result.total,
            "Fetched page"
        );

        Ok(result)
    }

    /// Inserts `records` and returns them as stored. No validation happens
    /// here.
    pub async fn bulk_insert(&self, records: Vec<S::NewRecord>) -> StorageResult<Vec<S::Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let count = records.len();
        let stored = self.storage.insert_many(records).await?;
        debug!(count, "Bulk inserted records");
        Ok(stored)
    }
}
