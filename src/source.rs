//! Character source with unbounded pushback
//!
//! A [`CharSource`] hands out one character at a time, either from a fixed
//! string or from a line-oriented reader that is refilled one line at a time.
//! Characters can be pushed back and are returned last-pushed-first.

use log::warn;
use smallvec::SmallVec;
use std::fmt;
use std::io::{self, BufRead};

pub struct CharSource {
    /// Line reader for streaming input, `None` for string input
    reader: Option<Box<dyn BufRead>>,
    /// Active buffer: the whole string, or the current line of a stream
    buffer: Vec<char>,
    /// Index of the next unread character in `buffer`
    cursor: usize,
    /// Pushed back characters, top of stack is read first
    pushed: SmallVec<[char; 8]>,
    /// Last I/O failure while refilling from the reader
    io_error: Option<io::Error>,
}

impl CharSource {
    /// Creates a source that reads the characters of `text`
    pub fn from_text(text: &str) -> Self {
        Self {
            reader: None,
            buffer: text.chars().collect(),
            cursor: 0,
            pushed: SmallVec::new(),
            io_error: None,
        }
    }

    /// Creates a source that reads `reader` one line at a time
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            reader: Some(Box::new(reader)),
            buffer: Vec::new(),
            cursor: 0,
            pushed: SmallVec::new(),
            io_error: None,
        }
    }

    /// Returns and consumes the next character, or `None` at end of input
    pub fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.pushed.pop() {
            return Some(ch);
        }
        if self.cursor >= self.buffer.len() && !self.refill() {
            return None;
        }
        let ch = self.buffer[self.cursor];
        self.cursor += 1;
        Some(ch)
    }

    /// Returns `ch` to the front of the input
    #[inline]
    pub fn push_char(&mut self, ch: char) {
        self.pushed.push(ch);
    }

    /// Pushes back `ch` unless it marks end of input
    #[inline]
    pub fn push_opt(&mut self, ch: Option<char>) {
        if let Some(ch) = ch {
            self.pushed.push(ch);
        }
    }

    /// Offset of the next unread character within the active buffer
    pub fn position(&self) -> usize {
        self.cursor.saturating_sub(self.pushed.len())
    }

    /// Number of characters in the active buffer
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Text of the active buffer
    pub fn buffer_text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Takes the last I/O error seen while refilling, if any
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Loads the next line from the reader. Returns false at end of input.
    fn refill(&mut self) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => false,
            Ok(_) => {
                self.buffer = String::from_utf8_lossy(&line).chars().collect();
                self.cursor = 0;
                true
            }
            Err(err) => {
                warn!("input read failed, treating as end of input: {err}");
                self.io_error = Some(err);
                self.reader = None;
                false
            }
        }
    }
}

impl fmt::Debug for CharSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharSource")
            .field("streaming", &self.reader.is_some())
            .field("buffer_len", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("pushed", &self.pushed)
            .finish()
    }
}
