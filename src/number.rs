//! Numeric literal recognition
//!
//! Numbers are recognized by a small state machine that always returns the
//! longest valid literal. A trailing exponent marker or exponent sign that is
//! not followed by digits is handed back to the input.

use crate::error::{ScanError, ScanResult};
use crate::source::CharSource;

/// States of the numeric literal machine.
///
/// Rejecting a character is the final state: the character goes back to the
/// input and the accumulated text is the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Initial,
    LeadingZero,
    BeforeDecimal,
    AfterDecimal,
    StartingExponent,
    FoundExponentSign,
    ScanningExponent,
    ScanningHex,
}

impl NumberState {
    /// Transition on `ch`, or `None` when `ch` ends the literal
    fn step(self, ch: char) -> Option<Self> {
        use NumberState::*;

        let digit = ch.is_ascii_digit();
        match (self, ch) {
            (Initial, '0') => Some(LeadingZero),
            (Initial, _) if digit => Some(BeforeDecimal),
            (LeadingZero, 'x' | 'X') => Some(ScanningHex),
            (LeadingZero | BeforeDecimal, '.') => Some(AfterDecimal),
            (LeadingZero | BeforeDecimal | AfterDecimal, 'e' | 'E') => Some(StartingExponent),
            (LeadingZero | BeforeDecimal | AfterDecimal, _) if digit => Some(self),
            (StartingExponent, '+' | '-') => Some(FoundExponentSign),
            (StartingExponent | FoundExponentSign | ScanningExponent, _) if digit => {
                Some(ScanningExponent)
            }
            (ScanningHex, _) if ch.is_ascii_hexdigit() => Some(ScanningHex),
            _ => None,
        }
    }

    /// Trailing characters that only make sense if more digits follow
    fn dangling_len(self) -> usize {
        match self {
            NumberState::StartingExponent => 1,
            NumberState::FoundExponentSign => 2,
            _ => 0,
        }
    }
}

/// Scans the longest numeric literal at the front of `source`.
///
/// The caller has already seen that the next character is a digit.
pub(crate) fn scan_number(source: &mut CharSource) -> String {
    let mut token = String::new();
    let mut state = NumberState::Initial;

    loop {
        let ch = source.next_char();
        match ch.and_then(|c| state.step(c).map(|next| (c, next))) {
            Some((c, next)) => {
                token.push(c);
                state = next;
            }
            None => {
                source.push_opt(ch);
                for _ in 0..state.dangling_len() {
                    if let Some(c) = token.pop() {
                        source.push_char(c);
                    }
                }
                return token;
            }
        }
    }
}

/// Converts the text of a number token to its value.
///
/// Hexadecimal literals (`0x1F`) are read in base 16; everything else,
/// including leading-zero forms like `007`, is read as decimal.
pub fn number_value(token: &str) -> ScanResult<f64> {
    let invalid = || ScanError::InvalidNumber {
        token: token.to_string(),
    };

    let mut source = CharSource::from_text(token);
    if token.is_empty() || scan_number(&mut source) != token {
        return Err(invalid());
    }

    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        if hex.is_empty() {
            return Err(invalid());
        }
        // f64 accumulation keeps long literals from overflowing
        return Ok(hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0.0, |acc, d| acc * 16.0 + f64::from(d)));
    }

    token.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scans one number and returns it with the rest of the input
    fn scan(input: &str) -> (String, String) {
        let mut source = CharSource::from_text(input);
        let token = scan_number(&mut source);
        let mut rest = String::new();
        while let Some(ch) = source.next_char() {
            rest.push(ch);
        }
        (token, rest)
    }

    #[test]
    fn test_integers() {
        assert_eq!(scan("42"), ("42".into(), "".into()));
        assert_eq!(scan("42abc"), ("42".into(), "abc".into()));
        assert_eq!(scan("7 8"), ("7".into(), " 8".into()));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(scan("3.14"), ("3.14".into(), "".into()));
        assert_eq!(scan("3."), ("3.".into(), "".into()));
        assert_eq!(scan("1.2.3"), ("1.2".into(), ".3".into()));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(scan("1e10"), ("1e10".into(), "".into()));
        assert_eq!(scan("6.02E+23;"), ("6.02E+23".into(), ";".into()));
        assert_eq!(scan("1.5e-3x"), ("1.5e-3".into(), "x".into()));
    }

    #[test]
    fn test_dangling_exponent_is_unwound() {
        assert_eq!(scan("3.14e"), ("3.14".into(), "e".into()));
        assert_eq!(scan("3.14ex"), ("3.14".into(), "ex".into()));
        assert_eq!(scan("1e+"), ("1".into(), "e+".into()));
        assert_eq!(scan("1E-z"), ("1".into(), "E-z".into()));
        assert_eq!(scan("2e+ 3"), ("2".into(), "e+ 3".into()));
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(scan("007"), ("007".into(), "".into()));
        assert_eq!(scan("0"), ("0".into(), "".into()));
        assert_eq!(scan("0.5"), ("0.5".into(), "".into()));
        assert_eq!(scan("0e3"), ("0e3".into(), "".into()));
    }

    #[test]
    fn test_hex() {
        assert_eq!(scan("0x1F"), ("0x1F".into(), "".into()));
        assert_eq!(scan("0XdeadBEEFg"), ("0XdeadBEEF".into(), "g".into()));
        assert_eq!(scan("0x"), ("0x".into(), "".into()));
        assert_eq!(scan("1x2"), ("1".into(), "x2".into()));
    }

    #[test]
    fn test_number_values() {
        assert_eq!(number_value("42").unwrap(), 42.0);
        assert_eq!(number_value("007").unwrap(), 7.0);
        assert_eq!(number_value("3.5").unwrap(), 3.5);
        assert_eq!(number_value("3.").unwrap(), 3.0);
        assert_eq!(number_value("1e3").unwrap(), 1000.0);
        assert_eq!(number_value("25E-2").unwrap(), 0.25);
        assert_eq!(number_value("0x1F").unwrap(), 31.0);
        assert_eq!(number_value("0XFF").unwrap(), 255.0);
    }

    #[test]
    fn test_invalid_number_values() {
        for token in ["", "abc", "0x", "1e", "1.2.3", "-1", " 1", "12abc"] {
            assert!(
                matches!(number_value(token), Err(ScanError::InvalidNumber { .. })),
                "expected {token:?} to be rejected"
            );
        }
    }
}
