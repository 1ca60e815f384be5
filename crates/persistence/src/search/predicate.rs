//! Compiled search predicates.
//!
//! A [`Predicate`] is an immutable boolean expression over one record. Storage
//! backends translate it into their own query language; [`Predicate::matches`]
//! evaluates it in memory against anything implementing [`Searchable`].

use serde::Serialize;

use super::fields::{FieldKind, SearchField};

/// The value of one searchable attribute of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A single text value.
    Text(&'a str),
    /// A multi-valued attribute.
    List(&'a [String]),
}

/// Records whose attributes can be read by field name.
pub trait Searchable {
    /// Returns the value of the named attribute, or `None` if the record has
    /// no such attribute. Missing attributes never match.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// A boolean expression over one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    /// Matches every record.
    Always,
    /// The field contains the term, ignoring ASCII case.
    Contains {
        /// The field to look in.
        #[serde(serialize_with = "serialize_field")]
        field: SearchField,
        /// The substring to look for.
        term: String,
    },
    /// Negation.
    Not(Box<Predicate>),
    /// Conjunction. Never empty; see [`Predicate::all`].
    All(Vec<Predicate>),
    /// Disjunction. Never empty; see [`Predicate::any`].
    Any(Vec<Predicate>),
}

fn serialize_field<S>(field: &SearchField, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(field.name)
}

impl Predicate {
    /// Creates a containment test.
    pub fn contains(field: SearchField, term: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            term: term.into(),
        }
    }

    /// Negates a predicate.
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not(Box::new(predicate))
    }

    /// Conjunction of `predicates`. An empty conjunction is [`Predicate::Always`].
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut predicates: Vec<_> = predicates.into_iter().collect();
        match predicates.len() {
            0 => Predicate::Always,
            1 => predicates.remove(0),
            _ => Predicate::All(predicates),
        }
    }

    /// Disjunction of `predicates`. An empty disjunction is also
    /// [`Predicate::Always`]: a search with nothing to look for filters nothing.
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut predicates: Vec<_> = predicates.into_iter().collect();
        match predicates.len() {
            0 => Predicate::Always,
            1 => predicates.remove(0),
            _ => Predicate::Any(predicates),
        }
    }

    /// Returns true for [`Predicate::Always`].
    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::Always)
    }

    /// Evaluates the predicate against a record.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Contains { field, term } => field_contains(record, field, term),
            Predicate::Not(inner) => !inner.matches(record),
            Predicate::All(items) => items.iter().all(|p| p.matches(record)),
            Predicate::Any(items) => items.iter().any(|p| p.matches(record)),
        }
    }
}

fn field_contains<R: Searchable + ?Sized>(record: &R, field: &SearchField, term: &str) -> bool {
    let Some(value) = record.field_value(field.name) else {
        return false;
    };
    match (field.kind, value) {
        (FieldKind::Text, FieldValue::Text(text)) => contains_ignore_ascii_case(text, term),
        (_, FieldValue::List(items)) => contains_ignore_ascii_case(&stringify_list(items), term),
        (FieldKind::List, FieldValue::Text(text)) => contains_ignore_ascii_case(text, term),
    }
}

/// Renders a multi-valued attribute the way it is stored: a compact JSON array.
pub fn stringify_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_default()
}

/// Substring test with ASCII case folding, the folding SQLite's `LIKE` uses.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
