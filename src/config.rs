//! Scanner configuration
//!
//! A [`ScannerConfig`] is owned by exactly one scanner. Every setting is
//! additive: behaviors can be switched on and characters or operators can be
//! registered, but nothing is ever removed through the scanner API.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Configuration options for the token scanner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Discard whitespace between tokens
    pub ignore_whitespace: bool,
    /// Discard `//` and `/* */` comments
    pub ignore_comments: bool,
    /// Scan tokens starting with a digit as numeric literals
    pub scan_numbers: bool,
    /// Scan quoted text as a single string token
    pub scan_strings: bool,
    /// Characters accepted in words besides letters and digits
    word_chars: IndexSet<char>,
    /// Registered multi-character operators
    operators: IndexSet<String>,
}

impl ScannerConfig {
    /// Creates a configuration with every behavior disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables whitespace skipping, returning the updated configuration
    pub fn with_ignore_whitespace(mut self) -> Self {
        self.ignore_whitespace = true;
        self
    }

    /// Enables comment skipping, returning the updated configuration
    pub fn with_ignore_comments(mut self) -> Self {
        self.ignore_comments = true;
        self
    }

    /// Enables numeric literal scanning, returning the updated configuration
    pub fn with_scan_numbers(mut self) -> Self {
        self.scan_numbers = true;
        self
    }

    /// Enables quoted string scanning, returning the updated configuration
    pub fn with_scan_strings(mut self) -> Self {
        self.scan_strings = true;
        self
    }

    /// Registers extra word characters, returning the updated configuration
    pub fn with_word_characters(mut self, chars: &str) -> Self {
        self.add_word_characters(chars);
        self
    }

    /// Registers an operator, returning the updated configuration
    pub fn with_operator(mut self, op: &str) -> Self {
        self.add_operator(op);
        self
    }

    /// Adds every character of `chars` to the word character set
    pub fn add_word_characters(&mut self, chars: &str) {
        self.word_chars.extend(chars.chars());
    }

    /// Registers `op` as a legal operator.
    ///
    /// The empty string is ignored since an empty token means end of input.
    pub fn add_operator(&mut self, op: &str) {
        if !op.is_empty() {
            self.operators.insert(op.to_string());
        }
    }

    /// Extra word characters in registration order
    pub fn word_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.word_chars.iter().copied()
    }

    /// Registered operators in registration order
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(String::as_str)
    }

    /// Letters, digits, and any registered extra word character
    #[inline]
    pub fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphanumeric() || self.word_chars.contains(&ch)
    }

    /// True when `op` is a registered operator
    #[inline]
    pub fn is_operator(&self, op: &str) -> bool {
        self.operators.contains(op)
    }

    /// True when some registered operator starts with `prefix`
    pub fn is_operator_prefix(&self, prefix: &str) -> bool {
        self.operators.iter().any(|op| op.starts_with(prefix))
    }
}
