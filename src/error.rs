//! Error types for token scanning
//!
//! End of input is never an error: the scanner reports it with an empty
//! token. Everything in this module describes malformed input or a misuse
//! of the scanner API.

use thiserror::Error;

/// Result type used throughout the crate
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors produced while scanning or converting tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// `verify_token` expected a token but the input was exhausted
    #[error("Missing {expected}")]
    Missing { expected: String },

    /// `verify_token` read a different token than the one expected
    #[error("Found {found} when expecting {expected}")]
    Mismatch { found: String, expected: String },

    /// A quoted string reached end of input before its closing delimiter
    #[error("Unterminated string starting with {delimiter}: {partial}")]
    UnterminatedLiteral { delimiter: char, partial: String },

    /// `position` was requested while two or more tokens were saved
    #[error("Position unavailable with {saved} saved tokens")]
    PositionUnavailable { saved: usize },

    /// The text is not a numeric literal
    #[error("Invalid number '{token}'")]
    InvalidNumber { token: String },

    /// The text is not a decodable quoted literal
    #[error("Invalid string literal {token}: {message}")]
    InvalidString { token: String, message: String },

    /// A record reader found a required delimiter missing
    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },
}

impl ScanError {
    /// Creates the error reported when `verify_token` does not see `expected`.
    ///
    /// An empty `found` means the input was exhausted.
    pub fn mismatch(found: &str, expected: &str) -> Self {
        if found.is_empty() {
            ScanError::Missing {
                expected: expected.to_string(),
            }
        } else {
            ScanError::Mismatch {
                found: found.to_string(),
                expected: expected.to_string(),
            }
        }
    }

    /// Returns true for both flavors of a failed token expectation
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ScanError::Missing { .. } | ScanError::Mismatch { .. })
    }

    pub fn malformed_record(message: impl Into<String>) -> Self {
        ScanError::MalformedRecord {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_string(token: &str, message: impl Into<String>) -> Self {
        ScanError::InvalidString {
            token: token.to_string(),
            message: message.into(),
        }
    }
}
