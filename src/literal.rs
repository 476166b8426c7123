//! Quoted string literals
//!
//! The scanner keeps a literal exactly as written, delimiters and escape
//! sequences included. Decoding into the character value is a separate step
//! performed by [`string_value`].

use crate::error::{ScanError, ScanResult};
use crate::source::CharSource;
use crate::token::is_quote;
use std::iter::Peekable;
use std::str::Chars;

/// Scans a quoted literal whose opening `delimiter` was already consumed.
///
/// Escape sequences are copied verbatim. Reaching end of input before the
/// closing delimiter is an error.
pub(crate) fn scan_string(source: &mut CharSource, delimiter: char) -> ScanResult<String> {
    let mut token = String::from(delimiter);
    loop {
        match source.next_char() {
            Some(ch) if ch == delimiter => {
                token.push(ch);
                return Ok(token);
            }
            Some('\\') => {
                if !scan_escape(source, &mut token) {
                    return Err(unterminated(delimiter, token));
                }
            }
            Some(ch) => token.push(ch),
            None => return Err(unterminated(delimiter, token)),
        }
    }
}

/// Copies one escape sequence, backslash included, into `token`.
///
/// Digit escapes run while decimal digits follow; `\x` and `\u` run while
/// hex digits follow. Returns false if the input ends right after the
/// backslash.
fn scan_escape(source: &mut CharSource, token: &mut String) -> bool {
    token.push('\\');
    let Some(ch) = source.next_char() else {
        return false;
    };
    token.push(ch);

    let accept: fn(&char) -> bool = match ch {
        '0'..='9' => char::is_ascii_digit,
        'x' | 'u' => char::is_ascii_hexdigit,
        _ => return true,
    };
    loop {
        match source.next_char() {
            Some(c) if accept(&c) => token.push(c),
            other => {
                source.push_opt(other);
                return true;
            }
        }
    }
}

fn unterminated(delimiter: char, partial: String) -> ScanError {
    ScanError::UnterminatedLiteral { delimiter, partial }
}

/// Returns the value of a string token: delimiters removed, escapes decoded.
///
/// Recognized escapes are the usual single-character ones, up to three
/// octal digits, `\x` with one or two hex digits and `\u` with exactly four.
/// Unknown escapes are kept as written.
pub fn string_value(token: &str) -> ScanResult<String> {
    let delimiter = match token.chars().next() {
        Some(ch) if is_quote(ch) => ch,
        _ => return Err(ScanError::invalid_string(token, "not a quoted literal")),
    };

    let mut source = CharSource::from_text(token);
    source.next_char();
    match scan_string(&mut source, delimiter) {
        Ok(scanned) if scanned == token => {}
        Ok(_) => return Err(ScanError::invalid_string(token, "text after closing quote")),
        Err(_) => return Err(ScanError::invalid_string(token, "missing closing quote")),
    }

    let body = &token[1..token.len() - 1];
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }
        // scan_string guarantees a character after every backslash
        let Some(esc) = chars.next() else {
            return Err(ScanError::invalid_string(token, "dangling backslash"));
        };
        match esc {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'v' => value.push('\u{000B}'),
            'a' => value.push('\u{0007}'),
            '\\' | '\'' | '"' => value.push(esc),
            '0'..='7' => {
                let first = esc.to_digit(8).unwrap_or(0);
                let code = take_digits(&mut chars, 8, 2, first);
                value.push(code_point(token, code)?);
            }
            'x' => {
                let Some(first) = chars.next_if(char::is_ascii_hexdigit) else {
                    return Err(ScanError::invalid_string(token, "\\x needs hex digits"));
                };
                let first = first.to_digit(16).unwrap_or(0);
                let code = take_digits(&mut chars, 16, 1, first);
                value.push(code_point(token, code)?);
            }
            'u' => {
                let mut code = 0;
                for _ in 0..4 {
                    let Some(digit) = chars.next_if(char::is_ascii_hexdigit) else {
                        return Err(ScanError::invalid_string(
                            token,
                            "\\u needs four hex digits",
                        ));
                    };
                    code = code * 16 + digit.to_digit(16).unwrap_or(0);
                }
                value.push(code_point(token, code)?);
            }
            other => {
                value.push('\\');
                value.push(other);
            }
        }
    }
    Ok(value)
}

/// Folds up to `max` more digits of `radix` into `acc`
fn take_digits(chars: &mut Peekable<Chars<'_>>, radix: u32, max: usize, mut acc: u32) -> u32 {
    for _ in 0..max {
        match chars.peek().and_then(|c| c.to_digit(radix)) {
            Some(digit) => {
                acc = acc * radix + digit;
                chars.next();
            }
            None => break,
        }
    }
    acc
}

fn code_point(token: &str, code: u32) -> ScanResult<char> {
    char::from_u32(code).ok_or_else(|| {
        ScanError::invalid_string(token, format!("invalid code point U+{code:04X}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> (ScanResult<String>, String) {
        let mut source = CharSource::from_text(input);
        let delimiter = source.next_char().expect("input starts with a quote");
        let result = scan_string(&mut source, delimiter);
        let mut rest = String::new();
        while let Some(ch) = source.next_char() {
            rest.push(ch);
        }
        (result, rest)
    }

    #[test]
    fn test_simple_strings() {
        assert_eq!(scan("\"hello\" world"), (Ok("\"hello\"".into()), " world".into()));
        assert_eq!(scan("'it''s'"), (Ok("'it'".into()), "'s'".into()));
        assert_eq!(scan("\"say 'hi'\""), (Ok("\"say 'hi'\"".into()), "".into()));
        assert_eq!(scan("\"\""), (Ok("\"\"".into()), "".into()));
    }

    #[test]
    fn test_escapes_kept_verbatim() {
        let (token, _) = scan(r#""a\nb""#);
        assert_eq!(token.unwrap(), r#""a\nb""#);
        let (token, _) = scan(r#""q\"q""#);
        assert_eq!(token.unwrap(), r#""q\"q""#);
        let (token, _) = scan(r#""\x41é\101""#);
        assert_eq!(token.unwrap(), r#""\x41é\101""#);
    }

    #[test]
    fn test_numeric_escape_pushes_back_terminator() {
        let (token, rest) = scan(r#""\12""#);
        assert_eq!(token.unwrap(), r#""\12""#);
        assert_eq!(rest, "");
        let (token, _) = scan(r#""\xfg""#);
        assert_eq!(token.unwrap(), r#""\xfg""#);
    }

    #[test]
    fn test_unterminated() {
        let (result, _) = scan("\"unterminated");
        assert_eq!(
            result,
            Err(ScanError::UnterminatedLiteral {
                delimiter: '"',
                partial: "\"unterminated".into(),
            })
        );

        let (result, _) = scan("'ends in backslash\\");
        assert!(matches!(
            result,
            Err(ScanError::UnterminatedLiteral { delimiter: '\'', .. })
        ));

        let (result, _) = scan("\"escaped quote\\\"");
        assert!(matches!(result, Err(ScanError::UnterminatedLiteral { .. })));
    }

    #[test]
    fn test_string_values() {
        assert_eq!(string_value("\"hello\"").unwrap(), "hello");
        assert_eq!(string_value("''").unwrap(), "");
        assert_eq!(string_value(r#""a\nb""#).unwrap(), "a\nb");
        assert_eq!(string_value(r#""tab\there""#).unwrap(), "tab\there");
        assert_eq!(string_value(r#"'it\'s'"#).unwrap(), "it's");
        assert_eq!(string_value(r#""back\\slash""#).unwrap(), "back\\slash");
        assert_eq!(string_value(r#""\x41\x4a""#).unwrap(), "AJ");
        assert_eq!(string_value(r#""\x41B""#).unwrap(), "AB");
        assert_eq!(string_value(r#""\101\0""#).unwrap(), "A\0");
        assert_eq!(string_value(r#""café""#).unwrap(), "café");
        assert_eq!(string_value(r#""\q""#).unwrap(), "\\q");
    }

    #[test]
    fn test_invalid_string_values() {
        for token in [
            "",
            "hello",
            "\"open",
            "\"a\"b\"",
            "'mixed\"",
            r#""\xZZ""#,
            r#""\u12""#,
            r#""\ud800""#,
        ] {
            assert!(
                matches!(string_value(token), Err(ScanError::InvalidString { .. })),
                "expected {token:?} to be rejected"
            );
        }
    }
}
