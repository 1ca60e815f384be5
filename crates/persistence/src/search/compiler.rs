//! Compiles a [`SearchQuery`] into a [`Predicate`] over a [`FieldSet`].
//!
//! A term matches a record when any field of the set contains it. NOT terms
//! negate that disjunction. Condition lists are always joined with AND,
//! whatever tag each single condition carries: in
//! `"Depression OR Anxiety NOT CBT"` both OR terms are required.

use crate::types::{Condition, SearchQuery, SingleOperator, TermOperator};

use super::fields::FieldSet;
use super::predicate::Predicate;

/// Compiles `query` against `fields`. Never fails.
pub fn compile(query: &SearchQuery, fields: &FieldSet) -> Predicate {
    match query {
        SearchQuery::Terms { terms, operator } => {
            let matched = terms.iter().map(|term| term_predicate(term, fields));
            match operator {
                TermOperator::And => Predicate::all(matched),
                TermOperator::Or => Predicate::any(matched),
            }
        }
        SearchQuery::Conditions { conditions } => Predicate::all(
            conditions
                .iter()
                .map(|condition| condition_predicate(condition, fields)),
        ),
    }
}

fn condition_predicate(condition: &Condition, fields: &FieldSet) -> Predicate {
    match condition {
        Condition::Single { term, operator } => {
            let matched = term_predicate(term, fields);
            match operator {
                SingleOperator::Or => matched,
                SingleOperator::Not => Predicate::not(matched),
            }
        }
        Condition::Group { terms, .. } => {
            Predicate::all(terms.iter().map(|term| term_predicate(term, fields)))
        }
    }
}

/// "Some field of the set contains `term`."
fn term_predicate(term: &str, fields: &FieldSet) -> Predicate {
    Predicate::any(fields.iter().map(|field| Predicate::contains(*field, term)))
}
