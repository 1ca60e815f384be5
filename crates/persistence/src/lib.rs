//! Advocate Directory Persistence Layer
//!
//! This crate turns free-text directory searches into paged queries against a
//! storage engine. It provides the search-term language, a backend-neutral
//! predicate form, and a SQLite engine that executes it.
//!
//! # Features
//!
//! - **Search language**: `AND`, `OR` and `NOT` keywords over a fixed field set
//! - **Predicates**: one compiled form, evaluated in memory or rendered as SQL
//! - **Paging**: one page of matches plus the total match count per query
//! - **Bulk insert**: stored records come back with engine-assigned fields
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`search`] - Lexer, parser, field sets, predicates and the compiler
//! - [`types`] - Records, parsed queries, pagination and validation
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and capability checks
//! - [`repository`] - Search repository over a storage handle
//! - [`backends`] - Engine implementations
//!
//! # Quick Start
//!
//! ```
//! use advocate_persistence::search::{ADVOCATE_FIELDS, compile, parse};
//! use advocate_persistence::types::{Advocate, NewAdvocate};
//! use chrono::Utc;
//!
//! let query = parse("Depression AND Anxiety NOT PTSD");
//! let predicate = compile(&query, &ADVOCATE_FIELDS);
//!
//! let advocate: Advocate = NewAdvocate::new("Bob", "Johnson", "Chicago", "MD")
//!     .with_specialties(["Depression", "Anxiety", "CBT"])
//!     .into_stored(3, Utc::now());
//!
//! assert!(predicate.matches(&advocate));
//! ```
//!
//! # Repository
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), advocate_persistence::StorageError> {
//! use std::sync::Arc;
//!
//! use advocate_persistence::backends::sqlite::SqliteBackend;
//! use advocate_persistence::repository::Repository;
//! use advocate_persistence::types::PageRequest;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let repository = Repository::advocates(Arc::new(backend))?;
//! let page = repository
//!     .get_all(PageRequest::new(1, 10), Some("PTSD OR Trauma"))
//!     .await?;
//! println!("{} of {} advocates", page.len(), page.total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod repository;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackendError, StorageError, StorageResult, ValidationError};
pub use repository::{AdvocateRepository, Repository};
pub use search::{ADVOCATE_FIELDS, FieldSet, Predicate};
pub use types::{Advocate, NewAdvocate, Page, PageRequest, SearchQuery};

// Re-export core traits
pub use core::{Backend, BackendCapability, BackendKind, RecordStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
