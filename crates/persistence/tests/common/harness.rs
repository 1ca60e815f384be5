//! Helpers for running searches against the SQLite backend.

use std::collections::BTreeSet;
use std::sync::Arc;

use advocate_persistence::backends::sqlite::SqliteBackend;
use advocate_persistence::repository::Repository;
use advocate_persistence::types::{Advocate, PageRequest};

use super::fixtures::directory;

/// Creates a fresh in-memory backend with the schema in place.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

/// Creates a repository over a fresh backend seeded with the reference
/// directory.
pub async fn seeded_repository() -> Repository<SqliteBackend> {
    let repository =
        Repository::advocates(Arc::new(create_backend())).expect("SQLite has every capability");
    let stored = repository
        .bulk_insert(directory())
        .await
        .expect("Failed to seed directory");
    assert_eq!(stored.len(), 7);
    repository
}

/// Runs `term` over the whole directory and returns the matching ids.
pub async fn search_ids(repository: &Repository<SqliteBackend>, term: &str) -> BTreeSet<i64> {
    let page = repository
        .get_all(PageRequest::new(1, 100), Some(term))
        .await
        .expect("search failed");
    assert_eq!(page.total as usize, page.len(), "single page expected");
    ids(&page.data)
}

/// Collects record ids.
pub fn ids(records: &[Advocate]) -> BTreeSet<i64> {
    records.iter().map(|r| r.id).collect()
}

/// Builds an id set.
pub fn id_set(ids: &[i64]) -> BTreeSet<i64> {
    ids.iter().copied().collect()
}
