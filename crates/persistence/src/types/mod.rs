//! Core types for the persistence layer.
//!
//! - [`Advocate`], [`NewAdvocate`] - Directory records
//! - [`SearchQuery`], [`Condition`] - Parsed search terms
//! - [`PageRequest`], [`Page`] - Offset pagination
//! - [`AdvocateValidator`] - Field rules for new records
//!
//! # Examples
//!
//! ```
//! use advocate_persistence::types::{Page, PageRequest};
//!
//! let request = PageRequest::new(3, 10);
//! assert_eq!(request.offset(), 20);
//!
//! let page: Page<u32> = Page::new(vec![21, 22], 22);
//! assert_eq!(page.total_pages(request.page_size), 3);
//! ```

mod advocate;
mod pagination;
mod search_query;
mod validation;

pub use advocate::{Advocate, NewAdvocate};
pub use pagination::{Page, PageRequest};
pub use search_query::{Condition, GroupOperator, SearchQuery, SingleOperator, TermOperator};
pub use validation::AdvocateValidator;
