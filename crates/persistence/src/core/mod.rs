//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Storage engine abstraction (identity, health, capabilities)
//! - [`RecordStorage`] - Paged filtered reads and bulk inserts
//!
//! ```text
//! Backend
//!     └── RecordStorage
//!             └── Repository (crate::repository)
//! ```
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use advocate_persistence::core::{Backend, BackendCapability, RecordStorage};
//! use advocate_persistence::error::StorageResult;
//! use advocate_persistence::search::Predicate;
//! use advocate_persistence::types::{Advocate, NewAdvocate, Page, PageRequest};
//!
//! #[async_trait]
//! impl RecordStorage for MyBackend {
//!     type Record = Advocate;
//!     type NewRecord = NewAdvocate;
//!
//!     async fn fetch_page(
//!         &self,
//!         predicate: &Predicate,
//!         page: PageRequest,
//!     ) -> StorageResult<Page<Advocate>> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ...
//! }
//! ```

pub mod backend;
pub mod storage;

pub use backend::{Backend, BackendCapability, BackendKind};
pub use storage::{
    REQUIRED_CAPABILITIES, RecordStorage, missing_capability, require_capabilities,
};
