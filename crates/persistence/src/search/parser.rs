//! Search-term parser.
//!
//! Turns one raw search string into a [`SearchQuery`]. The grammar is not a
//! boolean algebra: the input is classified by which keywords it contains,
//! and the first matching rule wins.
//!
//! ```text
//! 1. ""                        -> Terms([], OR)
//! 2. "NOT " rest               -> Conditions([NOT rest])
//! 3. has " AND " and " NOT "   -> Conditions([Group(and-terms), NOT n1, NOT n2, ...])
//! 4. has " OR " and " NOT "    -> Conditions([OR o1, OR o2, ..., NOT n1, ...])
//! 5. has " NOT "               -> Conditions([OR main, NOT n1, ...])
//! 6. has " AND "               -> Terms(split, AND)
//! 7. has " OR "                -> Terms(split, OR)
//! 8. anything else             -> Terms([raw], OR)
//! ```
//!
//! In rules 3 to 5 the input is split on `" NOT "` first; only the piece before
//! the first `NOT` is split again on `" AND "` or `" OR "`. Pieces are trimmed.
//! Rule 8 keeps the raw string as given.
//!
//! Parsing never fails.

use crate::types::{Condition, SearchQuery, TermOperator};

use super::lexer::{Keyword, Lexer};

/// Parses an optional raw search term. `None` and `""` both match everything.
pub fn parse_search_term(raw: Option<&str>) -> SearchQuery {
    match raw {
        Some(raw) => parse(raw),
        None => SearchQuery::match_all(),
    }
}

/// Parses a raw search term.
pub fn parse(raw: &str) -> SearchQuery {
    let lexer = Lexer::new(raw);

    if lexer.is_empty() {
        return SearchQuery::match_all();
    }

    if let Some(rest) = lexer.leading_not() {
        return SearchQuery::conditions(vec![Condition::not(rest.trim())]);
    }

    let has_and = lexer.contains(Keyword::And);
    let has_or = lexer.contains(Keyword::Or);
    let has_not = lexer.contains(Keyword::Not);

    if has_and && has_not {
        let (head, negated) = split_negations(&lexer);
        let mut conditions = vec![Condition::group(trimmed(
            Lexer::new(head).segments(Keyword::And),
        ))];
        conditions.extend(negated);
        return SearchQuery::conditions(conditions);
    }

    if has_or && has_not {
        let (head, negated) = split_negations(&lexer);
        let mut conditions: Vec<Condition> = trimmed(Lexer::new(head).segments(Keyword::Or))
            .into_iter()
            .map(Condition::or)
            .collect();
        conditions.extend(negated);
        return SearchQuery::conditions(conditions);
    }

    if has_not {
        let (head, negated) = split_negations(&lexer);
        let mut conditions = vec![Condition::or(head.trim())];
        conditions.extend(negated);
        return SearchQuery::conditions(conditions);
    }

    if has_and {
        return SearchQuery::terms(trimmed(lexer.segments(Keyword::And)), TermOperator::And);
    }

    if has_or {
        return SearchQuery::terms(trimmed(lexer.segments(Keyword::Or)), TermOperator::Or);
    }

    SearchQuery::terms([raw], TermOperator::Or)
}

/// Splits on `" NOT "`: the first piece, plus a NOT condition per later piece.
fn split_negations<'a>(lexer: &Lexer<'a>) -> (&'a str, Vec<Condition>) {
    let mut segments = lexer.segments(Keyword::Not).into_iter();
    // segments() always yields at least one piece
    let head = segments.next().unwrap_or_default();
    let negated = segments.map(|term| Condition::not(term.trim())).collect();
    (head, negated)
}

fn trimmed(segments: Vec<&str>) -> Vec<String> {
    segments.into_iter().map(|s| s.trim().to_string()).collect()
}
