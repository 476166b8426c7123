//! # Token Scanner
//!
//! A configurable lexical scanner that divides text into tokens: words,
//! numbers, quoted strings, operators and separators.
//!
//! ## Overview
//!
//! By default a [`TokenScanner`] recognizes two kinds of tokens: runs of
//! letters and digits, and single punctuation or whitespace characters.
//! Further behaviors are switched on per scanner:
//!
//! - **Whitespace skipping**: drop separators between tokens
//! - **Comment skipping**: drop `//` line comments and `/* */` block comments
//! - **Number scanning**: read the longest numeric literal (`3.14e-2`, `0x1F`, `007`)
//! - **String scanning**: read `"..."` and `'...'` literals, escapes included, as one token
//! - **Word characters**: accept extra characters such as `_` inside words
//! - **Operators**: register multi-character operators, matched longest first
//!
//! Tokens are plain `String`s. The empty string marks end of input, and a
//! token's [`Category`] is computed from its text whenever it is needed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use token_scanner::TokenScanner;
//!
//! let mut scanner = TokenScanner::new("x += 42");
//! scanner.ignore_whitespace();
//! scanner.scan_numbers();
//! scanner.add_operator("+=");
//!
//! let mut tokens = Vec::new();
//! while scanner.has_more_tokens()? {
//!     tokens.push(scanner.next_token()?);
//! }
//! assert_eq!(tokens, ["x", "+=", "42"]);
//! # Ok::<(), token_scanner::ScanError>(())
//! ```
//!
//! ## Classifying Tokens
//!
//! ```rust
//! use token_scanner::{Category, TokenScanner};
//!
//! let scanner = TokenScanner::new("");
//! assert_eq!(scanner.token_type("42"), Category::Number);
//! assert_eq!(scanner.token_type("foo"), Category::Word);
//! assert_eq!(scanner.token_type("+"), Category::Operator);
//! assert_eq!(scanner.token_type(""), Category::EndOfInput);
//! ```
//!
//! ## Literal Values
//!
//! String tokens keep their delimiters and escapes exactly as written.
//! Decoding is a separate step:
//!
//! ```rust
//! use token_scanner::TokenScanner;
//!
//! let mut scanner = TokenScanner::new(r#""a\tb" 0x1F"#);
//! scanner.scan_strings();
//! scanner.scan_numbers();
//! scanner.ignore_whitespace();
//!
//! let text = scanner.next_token()?;
//! assert_eq!(text, r#""a\tb""#);
//! assert_eq!(scanner.string_value(&text)?, "a\tb");
//!
//! let number = scanner.next_token()?;
//! assert_eq!(scanner.number_value(&number)?, 31.0);
//! # Ok::<(), token_scanner::ScanError>(())
//! ```
//!
//! ## Lookahead and Verification
//!
//! ```rust
//! use token_scanner::{ScanError, TokenScanner};
//!
//! let mut scanner = TokenScanner::new("go north");
//! scanner.ignore_whitespace();
//!
//! scanner.verify_token("go")?;
//! let direction = scanner.next_token()?;
//! scanner.save_token(direction);
//! assert_eq!(scanner.next_token()?, "north");
//!
//! match scanner.verify_token("now") {
//!     Err(ScanError::Missing { expected }) => assert_eq!(expected, "now"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), ScanError>(())
//! ```
//!
//! ## Streaming Input
//!
//! ```rust,no_run
//! use token_scanner::TokenScanner;
//!
//! let mut scanner = TokenScanner::from_file("commands.txt")?;
//! scanner.ignore_whitespace();
//! for token in scanner.by_ref() {
//!     println!("{}", token?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: token and
//! comment activity at `trace`, configuration changes at `debug`, and read
//! failures on streaming input at `warn`.

pub mod config;
pub mod error;
pub mod literal;
pub mod number;
pub mod scanner;
pub mod source;
pub mod token;


// Re-export main types and functions
pub use config::ScannerConfig;
pub use error::{ScanError, ScanResult};
pub use literal::string_value;
pub use number::number_value;
pub use scanner::TokenScanner;
pub use source::CharSource;
pub use token::{Category, classify, is_valid_identifier};
