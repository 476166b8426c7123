//! Token scanner
//!
//! This module provides [`TokenScanner`], which turns a string or a
//! line-oriented reader into a sequence of tokens under a configurable rule
//! set. Tokens are returned as owned strings; the empty string means the
//! input is exhausted.

use crate::config::ScannerConfig;
use crate::error::{ScanError, ScanResult};
use crate::literal::{scan_string, string_value};
use crate::number::{number_value, scan_number};
use crate::source::CharSource;
use crate::token::{Category, classify, is_quote, is_valid_identifier};
use log::{debug, trace};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Buffers shorter than this are shown in full by `Display`
const MAX_DISPLAY_LENGTH: usize = 20;

/// Splits input into words, numbers, strings and operators
#[derive(Debug)]
pub struct TokenScanner {
    source: CharSource,
    config: ScannerConfig,
    /// Saved tokens, top of stack is returned first
    saved_tokens: Vec<String>,
}

impl TokenScanner {
    /// Creates a scanner over `input` with every behavior disabled
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ScannerConfig::default())
    }

    /// Creates a scanner over `input` using a prepared configuration
    pub fn with_config(input: &str, config: ScannerConfig) -> Self {
        Self {
            source: CharSource::from_text(input),
            config,
            saved_tokens: Vec::new(),
        }
    }

    /// Creates a scanner that reads `reader` one line at a time
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            source: CharSource::from_reader(reader),
            config: ScannerConfig::default(),
            saved_tokens: Vec::new(),
        }
    }

    /// Creates a scanner that reads the file at `path` one line at a time
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Replaces the input with `input`.
    ///
    /// Saved tokens and characters are dropped; the configuration is kept.
    pub fn set_input(&mut self, input: &str) {
        debug!("scanner input reset to {} chars", input.chars().count());
        self.source = CharSource::from_text(input);
        self.saved_tokens.clear();
    }

    /// Replaces the input with a line reader
    pub fn set_reader<R: BufRead + 'static>(&mut self, reader: R) {
        debug!("scanner input reset to line reader");
        self.source = CharSource::from_reader(reader);
        self.saved_tokens.clear();
    }

    /// Returns the configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Returns the configuration for in-place changes
    pub fn config_mut(&mut self) -> &mut ScannerConfig {
        &mut self.config
    }

    /// Skips whitespace between tokens from now on
    pub fn ignore_whitespace(&mut self) {
        debug!("ignoring whitespace");
        self.config.ignore_whitespace = true;
    }

    /// Skips `//` and `/* */` comments from now on
    pub fn ignore_comments(&mut self) {
        debug!("ignoring comments");
        self.config.ignore_comments = true;
    }

    /// Scans tokens that start with a digit as the longest numeric literal
    pub fn scan_numbers(&mut self) {
        debug!("scanning numbers");
        self.config.scan_numbers = true;
    }

    /// Scans quoted text, through the matching quote, as one token
    pub fn scan_strings(&mut self) {
        debug!("scanning strings");
        self.config.scan_strings = true;
    }

    /// Accepts every character of `chars` inside words
    pub fn add_word_characters(&mut self, chars: &str) {
        debug!("adding word characters {chars:?}");
        self.config.add_word_characters(chars);
    }

    /// Registers a multi-character operator
    pub fn add_operator(&mut self, op: &str) {
        debug!("adding operator {op:?}");
        self.config.add_operator(op);
    }

    /// Returns true if another token is available, without consuming it
    pub fn has_more_tokens(&mut self) -> ScanResult<bool> {
        let token = self.next_token()?;
        let more = !token.is_empty();
        self.save_token(token);
        Ok(more)
    }

    /// Returns the next token, or the empty string at end of input
    pub fn next_token(&mut self) -> ScanResult<String> {
        if let Some(token) = self.saved_tokens.pop() {
            return Ok(token);
        }

        loop {
            if self.config.ignore_whitespace {
                self.skip_spaces();
            }
            let Some(ch) = self.source.next_char() else {
                trace!("end of input");
                return Ok(String::new());
            };

            if ch == '/' && self.config.ignore_comments {
                match self.source.next_char() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment();
                        continue;
                    }
                    other => self.source.push_opt(other),
                }
            }

            let token = if is_quote(ch) && self.config.scan_strings {
                scan_string(&mut self.source, ch)?
            } else if ch.is_ascii_digit() && self.config.scan_numbers {
                self.source.push_char(ch);
                scan_number(&mut self.source)
            } else if self.config.is_word_char(ch) {
                self.scan_word(ch)
            } else {
                self.scan_operator(ch)
            };
            trace!("token {token:?}");
            return Ok(token);
        }
    }

    /// Saves `token` to be returned by the next call to `next_token`
    pub fn save_token(&mut self, token: impl Into<String>) {
        self.saved_tokens.push(token.into());
    }

    /// Reads the next token and checks that it is `expected`
    pub fn verify_token(&mut self, expected: &str) -> ScanResult<()> {
        let token = self.next_token()?;
        if token == expected {
            Ok(())
        } else {
            Err(ScanError::mismatch(&token, expected))
        }
    }

    /// Discards whitespace up to the next non-whitespace character
    pub fn skip_whitespace(&mut self) {
        loop {
            match self.source.next_char() {
                Some(ch) if ch.is_whitespace() => {}
                other => {
                    self.source.push_opt(other);
                    return;
                }
            }
        }
    }

    /// Returns the offset of the next token in the active buffer.
    ///
    /// With one saved token this is where that token starts. With more than
    /// one the position cannot be recovered.
    pub fn position(&self) -> ScanResult<usize> {
        let pos = self.source.position();
        match self.saved_tokens.as_slice() {
            [] => Ok(pos),
            [token] => Ok(pos.saturating_sub(token.chars().count())),
            saved => Err(ScanError::PositionUnavailable { saved: saved.len() }),
        }
    }

    /// Returns the category of `token`
    pub fn token_type(&self, token: &str) -> Category {
        classify(token, &self.config)
    }

    /// Returns true if `token` is a legal identifier under this scanner's
    /// word characters
    pub fn is_valid_identifier(&self, token: &str) -> bool {
        is_valid_identifier(token, &self.config)
    }

    /// Returns the numeric value of a number token
    pub fn number_value(&self, token: &str) -> ScanResult<f64> {
        number_value(token)
    }

    /// Returns the decoded value of a string token
    pub fn string_value(&self, token: &str) -> ScanResult<String> {
        string_value(token)
    }

    /// Takes the I/O error that ended a streaming input early, if any
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.source.take_io_error()
    }

    /// Skips whitespace, stopping at whitespace registered as an operator
    fn skip_spaces(&mut self) {
        while let Some(ch) = self.source.next_char() {
            if !ch.is_whitespace() || self.config.is_operator(ch.encode_utf8(&mut [0; 4])) {
                self.source.push_char(ch);
                return;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        trace!("skipping line comment");
        while let Some(ch) = self.source.next_char() {
            if ch == '\n' || ch == '\r' {
                return;
            }
        }
    }

    /// Unterminated block comments silently run to end of input. The star of
    /// the opener already counts, so `/*/` is a complete comment.
    fn skip_block_comment(&mut self) {
        trace!("skipping block comment");
        let mut prev = Some('*');
        while let Some(ch) = self.source.next_char() {
            if prev == Some('*') && ch == '/' {
                return;
            }
            prev = Some(ch);
        }
    }

    fn scan_word(&mut self, first: char) -> String {
        let mut token = String::from(first);
        loop {
            match self.source.next_char() {
                Some(ch) if self.config.is_word_char(ch) => token.push(ch),
                other => {
                    self.source.push_opt(other);
                    return token;
                }
            }
        }
    }

    /// Longest registered operator at the front of the input, or `first`
    /// alone when none matches
    fn scan_operator(&mut self, first: char) -> String {
        let mut op = String::from(first);
        while self.config.is_operator_prefix(&op) {
            match self.source.next_char() {
                Some(ch) => op.push(ch),
                None => break,
            }
        }
        while op.chars().nth(1).is_some() && !self.config.is_operator(&op) {
            if let Some(ch) = op.pop() {
                self.source.push_char(ch);
            }
        }
        op
    }
}

impl Iterator for TokenScanner {
    type Item = ScanResult<String>;

    /// Yields tokens until end of input. An error is yielded once, after
    /// which the remaining input is abandoned.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_empty() => None,
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.set_input("");
                Some(Err(err))
            }
        }
    }
}

impl fmt::Display for TokenScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.source.buffer_len();
        if len < MAX_DISPLAY_LENGTH {
            write!(f, "TokenScanner(\"{}\")", self.source.buffer_text())
        } else {
            write!(f, "TokenScanner({len} chars)")
        }
    }
}
