//! Tokenizer for the search-term language.
//!
//! Keywords are the literal, case-sensitive separators `" AND "`, `" OR "` and
//! `" NOT "` (each bounded by single spaces), plus the prefix `"NOT "` at the
//! very start of the input. Everything between separators is free text.
//!
//! The lexer tokenizes with respect to one keyword at a time. Separator
//! occurrences are found left to right without overlap, so
//! `tokenize(Keyword::And)` yields exactly the pieces that splitting the
//! input on `" AND "` would.

use std::fmt;

/// Prefix that negates the whole input.
pub const LEADING_NOT: &str = "NOT ";

/// A search keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,
}

impl Keyword {
    /// The space-bounded separator for this keyword.
    pub const fn separator(self) -> &'static str {
        match self {
            Keyword::And => " AND ",
            Keyword::Or => " OR ",
            Keyword::Not => " NOT ",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.separator().trim())
    }
}

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Free text between separators. May be empty or padded with whitespace.
    Text(&'a str),
    /// A keyword separator.
    Separator(Keyword),
}

/// Tokenizer over one raw search string.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Returns true if the input is the empty string.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// If the input starts with `"NOT "`, returns what follows the prefix.
    pub fn leading_not(&self) -> Option<&'a str> {
        self.input.strip_prefix(LEADING_NOT)
    }

    /// Returns true if the separator for `keyword` occurs anywhere.
    pub fn contains(&self, keyword: Keyword) -> bool {
        self.input.contains(keyword.separator())
    }

    /// Splits the input into text and separator tokens for one keyword.
    ///
    /// The stream always starts and ends with a [`Token::Text`] and alternates
    /// between text and separators.
    pub fn tokenize(&self, keyword: Keyword) -> Vec<Token<'a>> {
        let separator = keyword.separator();
        let mut tokens = Vec::new();
        let mut last = 0;

        for (start, matched) in self.input.match_indices(separator) {
            tokens.push(Token::Text(&self.input[last..start]));
            tokens.push(Token::Separator(keyword));
            last = start + matched.len();
        }
        tokens.push(Token::Text(&self.input[last..]));

        tokens
    }

    /// Returns only the text pieces of [`tokenize`](Self::tokenize), untrimmed.
    pub fn segments(&self, keyword: Keyword) -> Vec<&'a str> {
        self.tokenize(keyword)
            .into_iter()
            .filter_map(|token| match token {
                Token::Text(text) => Some(text),
                Token::Separator(_) => None,
            })
            .collect()
    }
}
