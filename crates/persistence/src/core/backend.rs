//! Backend abstraction for storage engines.
//!
//! This module defines the [`Backend`] trait: identity, health and the
//! capabilities one engine advertises. Query execution lives on
//! [`RecordStorage`](super::RecordStorage), where each call checks a
//! connection out of the engine's pool and returns it when the call ends.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// Custom or unknown engine.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Operations an engine may support.
///
/// Checked once when a repository is built, so a handle that cannot run
/// directory queries is rejected up front rather than on the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCapability {
    /// Select rows through a compiled [`Predicate`](crate::search::Predicate).
    FilteredQuery,
    /// LIMIT/OFFSET paging.
    OffsetPagination,
    /// Page rows and total count from one statement.
    WindowedCount,
    /// Inserts that return the stored rows, engine-assigned fields included.
    InsertReturning,
}

impl std::fmt::Display for BackendCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BackendCapability::FilteredQuery => "filtered-query",
            BackendCapability::OffsetPagination => "offset-pagination",
            BackendCapability::WindowedCount => "windowed-count",
            BackendCapability::InsertReturning => "insert-returning",
        };
        write!(f, "{}", name)
    }
}

/// A storage engine handle.
///
/// # Example
///
/// ```ignore
/// use advocate_persistence::core::{Backend, BackendCapability};
///
/// if !backend.supports(BackendCapability::InsertReturning) {
///     // bulk inserts cannot report engine-assigned ids
/// }
/// ```
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks if this backend supports the given capability.
    fn supports(&self, capability: BackendCapability) -> bool;

    /// Returns all capabilities supported by this backend.
    fn capabilities(&self) -> Vec<BackendCapability>;

    /// Checks if the backend is healthy and accepting connections.
    async fn health_check(&self) -> Result<(), BackendError>;
}
