//! API test harness.
//!
//! Builds [`TestServer`]s over a fresh in-memory SQLite backend, or over a
//! backend whose every call fails.

use std::sync::Arc;

use advocate_persistence::backends::sqlite::SqliteBackend;
use advocate_persistence::core::{Backend, BackendCapability, BackendKind, RecordStorage};
use advocate_persistence::error::{BackendError, StorageError, StorageResult};
use advocate_persistence::search::Predicate;
use advocate_persistence::types::{Advocate, NewAdvocate, Page, PageRequest};
use async_trait::async_trait;
use axum_test::TestServer;

use advocate_rest::{ServerConfig, create_app_with_config};

use super::fixtures::directory;

/// A test server plus the backend behind it.
pub struct TestApp<S> {
    /// The test server instance.
    pub server: TestServer,
    /// The storage backend.
    pub backend: Arc<S>,
}

/// Creates a fresh in-memory backend with the schema in place.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

/// Serves an empty directory with the test configuration.
pub fn empty_app() -> TestApp<SqliteBackend> {
    app_with_config(ServerConfig::for_testing())
}

/// Serves an empty directory with `config`.
pub fn app_with_config(config: ServerConfig) -> TestApp<SqliteBackend> {
    let backend = Arc::new(create_backend());
    let app = create_app_with_config(Arc::clone(&backend), config)
        .expect("SQLite has every capability");
    let server = TestServer::new(app).expect("Failed to create test server");
    TestApp { server, backend }
}

/// Serves the reference directory, where advocate `n` has id `n`.
pub async fn seeded_app() -> TestApp<SqliteBackend> {
    let app = empty_app();
    let stored = app
        .backend
        .insert_many(directory())
        .await
        .expect("Failed to seed directory");
    assert_eq!(stored.len(), 7);
    app
}

/// Serves a backend that fails every query and health check.
pub fn broken_app() -> TestApp<BrokenStorage> {
    let backend = Arc::new(BrokenStorage);
    let app = create_app_with_config(Arc::clone(&backend), ServerConfig::for_testing())
        .expect("BrokenStorage advertises every capability");
    let server = TestServer::new(app).expect("Failed to create test server");
    TestApp { server, backend }
}

/// Storage whose engine is always down.
#[derive(Debug)]
pub struct BrokenStorage;

fn down() -> BackendError {
    BackendError::Unavailable {
        backend_name: "broken".to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl Backend for BrokenStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Custom("broken")
    }

    fn name(&self) -> &'static str {
        "broken"
    }

    fn supports(&self, _capability: BackendCapability) -> bool {
        true
    }

    fn capabilities(&self) -> Vec<BackendCapability> {
        vec![
            BackendCapability::FilteredQuery,
            BackendCapability::OffsetPagination,
            BackendCapability::InsertReturning,
        ]
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Err(down())
    }
}

#[async_trait]
impl RecordStorage for BrokenStorage {
    type Record = Advocate;
    type NewRecord = NewAdvocate;

    async fn fetch_page(
        &self,
        _predicate: &Predicate,
        _page: PageRequest,
    ) -> StorageResult<Page<Advocate>> {
        Err(StorageError::Backend(down()))
    }

    async fn insert_many(&self, _records: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        Err(StorageError::Backend(down()))
    }
}
