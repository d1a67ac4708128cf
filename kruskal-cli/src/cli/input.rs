//! Whitespace-separated token reading for console and file input.
//!
//! Tokens are taken from whole lines, so a malformed token can be followed
//! by [`TokenReader::discard_line`] to drop whatever else the user typed on
//! that line before re-prompting.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Outcome of reading one typed field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Parsed<T> {
    /// The next token parsed successfully.
    Value(T),
    /// The next token could not be parsed; it has been consumed.
    Malformed(String),
    /// The input ended before another token appeared.
    Exhausted,
}

pub(crate) struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub(crate) const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading further lines as needed.
    pub(crate) fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }

    /// Reads the next token and parses it as `T`.
    pub(crate) fn next_parsed<T: FromStr>(&mut self) -> io::Result<Parsed<T>> {
        Ok(match self.next_token()? {
            None => Parsed::Exhausted,
            Some(token) => match token.parse() {
                Ok(value) => Parsed::Value(value),
                Err(_) => Parsed::Malformed(token),
            },
        })
    }

    /// Drops the unread remainder of the current line.
    pub(crate) fn discard_line(&mut self) {
        self.pending.clear();
    }
}
