//! Directory search.
//!
//! A raw search term travels through three stages:
//!
//! ```text
//! "Depression AND Anxiety NOT PTSD"
//!    └── lexer      keyword separators and free text
//!    └── parser     SearchQuery::Conditions([Group[Depression, Anxiety], NOT PTSD])
//!    └── compiler   all(all(any(fields ~ Depression), any(fields ~ Anxiety)),
//!                       not(any(fields ~ PTSD)))
//! ```
//!
//! - [`lexer`] - Keyword separators of the search-term language
//! - [`parser`] - Raw string to [`SearchQuery`](crate::types::SearchQuery)
//! - [`fields`] - The attributes a term is matched against
//! - [`predicate`] - Backend-neutral boolean expressions and in-memory matching
//! - [`compiler`] - Query to predicate over a field set
//!
//! None of the stages can fail: every string is a valid search term.

pub mod compiler;
pub mod fields;
pub mod lexer;
pub mod parser;
pub mod predicate;

pub use compiler::compile;
pub use fields::{ADVOCATE_FIELDS, FieldKind, FieldSet, SearchField};
pub use lexer::{Keyword, Lexer, Token};
pub use parser::{parse, parse_search_term};
pub use predicate::{FieldValue, Predicate, Searchable};
