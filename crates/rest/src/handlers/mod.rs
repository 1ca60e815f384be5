//! HTTP request handlers.
//!
//! - [`advocates`] - Paged listing and search
//! - [`seed`] - Insert one validated advocate
//! - [`health`] - Health and liveness endpoints

pub mod advocates;
pub mod health;
pub mod seed;

// Re-export handlers for convenience
pub use advocates::{AdvocatesResponse, PaginationMeta, list_advocates_handler};
pub use health::{health_handler, liveness_handler};
pub use seed::{SeedResponse, seed_handler};
