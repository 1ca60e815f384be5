//! Axum extractors for directory listing parameters.
//!
//! - [`Pagination`] - `page` and `pageSize`, validated as positive integers
//! - [`SearchTerm`] - the raw `searchTerm`, with empty treated as absent

mod pagination;
mod search_term;

pub use pagination::{Pagination, parse_leading_int};
pub use search_term::SearchTerm;
