//! SQLite backend implementation.
//!
//! Supports in-memory databases (tests, demos) and file databases. Both
//! modes share one connection pool per backend.
//!
//! # Example
//!
//! ```no_run
//! use advocate_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE advocates (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     first_name TEXT NOT NULL,
//!     last_name TEXT NOT NULL,
//!     city TEXT NOT NULL,
//!     degree TEXT NOT NULL,
//!     specialties TEXT NOT NULL DEFAULT '[]',  -- JSON array
//!     years_of_experience INTEGER NOT NULL,
//!     phone_number INTEGER NOT NULL,
//!     created_at TEXT NOT NULL                 -- RFC 3339, set on insert
//! );
//! ```
//!
//! # Searching
//!
//! Each `Contains` test becomes `column LIKE '%' || ?N || '%' ESCAPE '\'`
//! with the term's wildcards escaped. SQLite's `LIKE` folds ASCII case only,
//! which is also how [`Predicate::matches`](crate::search::Predicate::matches)
//! compares.

mod backend;
mod query_builder;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use query_builder::{SqlFragment, SqlParam, like_pattern, page_statement, where_clause};
pub use schema::SCHEMA_VERSION;
