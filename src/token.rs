//! Token categories
//!
//! Tokens are plain strings. Their category is derived from the text on
//! demand, so any string can be classified, not just scanner output.

use crate::config::ScannerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a token, recovered from its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// The empty token, signalling that no input remains
    EndOfInput,
    /// Whitespace
    Separator,
    /// Letters, digits and extra word characters
    Word,
    /// Numeric literal
    Number,
    /// Quoted literal including its delimiters
    String,
    /// Anything else
    Operator,
}

impl Category {
    /// Upper-case name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Category::EndOfInput => "EOF",
            Category::Separator => "SEPARATOR",
            Category::Word => "WORD",
            Category::Number => "NUMBER",
            Category::String => "STRING",
            Category::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies `token` by its first character.
///
/// Only the extra word characters of `config` matter; the scanning flags do
/// not, so `"42"` is a number even when number scanning is off.
pub fn classify(token: &str, config: &ScannerConfig) -> Category {
    let Some(first) = token.chars().next() else {
        return Category::EndOfInput;
    };
    if first.is_whitespace() {
        Category::Separator
    } else if is_quote(first) {
        Category::String
    } else if first.is_ascii_digit() {
        Category::Number
    } else if config.is_word_char(first) {
        Category::Word
    } else {
        Category::Operator
    }
}

/// True when `token` is non-empty, does not start with a digit, and holds
/// only word characters
pub fn is_valid_identifier(token: &str, config: &ScannerConfig) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if config.is_word_char(first) && !first.is_ascii_digit() => {
            chars.all(|ch| config.is_word_char(ch))
        }
        _ => false,
    }
}

#[inline]
pub(crate) fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}
