//! Structured search queries.
//!
//! A [`SearchQuery`] is the typed result of parsing a raw search term. It is
//! either a flat list of terms combined with one operator, or a list of
//! [`Condition`]s that are always combined with AND.
//!
//! Queries serialize to the same JSON shape the directory API has always
//! logged:
//!
//! ```
//! use advocate_persistence::types::{Condition, SearchQuery};
//!
//! let query = SearchQuery::conditions(vec![
//!     Condition::group(["Depression", "Anxiety"]),
//!     Condition::not("PTSD"),
//! ]);
//! let json = serde_json::to_value(&query).unwrap();
//! assert_eq!(json["conditions"][0]["operator"], "AND");
//! assert_eq!(json["conditions"][1]["term"], "PTSD");
//! assert_eq!(json["conditions"][1]["operator"], "NOT");
//! ```

use serde::{Deserialize, Serialize};

/// Operator joining a flat list of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermOperator {
    /// Every term must match.
    #[serde(rename = "AND")]
    And,
    /// At least one term must match.
    #[serde(rename = "OR")]
    Or,
}

/// Tag carried by a single-term condition.
///
/// The tag decides whether the term's field disjunction is negated. It does
/// not change how the condition joins its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleOperator {
    /// The term must match some field.
    #[serde(rename = "OR")]
    Or,
    /// The term must match no field.
    #[serde(rename = "NOT")]
    Not,
}

/// Operator of a grouped condition. Groups are always conjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupOperator {
    /// Every term of the group must match.
    #[default]
    #[serde(rename = "AND")]
    And,
}

/// One clause of a [`SearchQuery::Conditions`] list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// A single term tagged OR or NOT.
    Single {
        /// The trimmed term.
        term: String,
        /// OR or NOT.
        operator: SingleOperator,
    },
    /// An AND group of terms.
    Group {
        /// The trimmed terms.
        terms: Vec<String>,
        /// Always AND.
        operator: GroupOperator,
    },
}

impl Condition {
    /// Creates a single-term condition.
    pub fn single(term: impl Into<String>, operator: SingleOperator) -> Self {
        Condition::Single {
            term: term.into(),
            operator,
        }
    }

    /// Creates an OR-tagged single-term condition.
    pub fn or(term: impl Into<String>) -> Self {
        Self::single(term, SingleOperator::Or)
    }

    /// Creates a NOT-tagged single-term condition.
    pub fn not(term: impl Into<String>) -> Self {
        Self::single(term, SingleOperator::Not)
    }

    /// Creates an AND group.
    pub fn group<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Condition::Group {
            terms: terms.into_iter().map(Into::into).collect(),
            operator: GroupOperator::And,
        }
    }
}

/// A parsed search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchQuery {
    /// A flat list of terms joined by one operator.
    Terms {
        /// The terms, in input order.
        terms: Vec<String>,
        /// How the terms combine.
        operator: TermOperator,
    },
    /// Heterogeneous clauses, joined with AND at the top level.
    Conditions {
        /// The clauses, in input order.
        conditions: Vec<Condition>,
    },
}

impl SearchQuery {
    /// The query that matches every record: no terms, OR.
    pub fn match_all() -> Self {
        SearchQuery::Terms {
            terms: Vec::new(),
            operator: TermOperator::Or,
        }
    }

    /// Creates a flat terms query.
    pub fn terms<I, T>(terms: I, operator: TermOperator) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SearchQuery::Terms {
            terms: terms.into_iter().map(Into::into).collect(),
            operator,
        }
    }

    /// Creates a conditions query.
    pub fn conditions(conditions: Vec<Condition>) -> Self {
        SearchQuery::Conditions { conditions }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::match_all()
    }
}
