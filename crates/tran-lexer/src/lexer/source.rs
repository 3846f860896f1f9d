// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Character sources the [`TextReader`](super::TextReader) pulls from.

use std::convert::Infallible;
use std::io::BufRead;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::LexError;

/// A forward-only, peekable stream of characters.
///
/// Once either method returns `Ok(None)` the source is exhausted and keeps
/// returning `Ok(None)`.
pub trait CharSource {
    /// Failure reported by the underlying stream.
    type Error;

    /// Returns the next character without consuming it.
    fn peek_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Consumes and returns the next character.
    fn next_char(&mut self) -> Result<Option<char>, Self::Error>;
}

/// An in-memory source. Reading from it cannot fail.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over the given text.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }
}

impl CharSource for StrSource<'_> {
    type Error = Infallible;

    fn peek_char(&mut self) -> Result<Option<char>, Infallible> {
        Ok(self.chars.peek().copied())
    }

    fn next_char(&mut self) -> Result<Option<char>, Infallible> {
        Ok(self.chars.next())
    }
}

/// A source over any buffered reader, decoded as UTF-8 one line at a time.
///
/// Only the current line is held in memory.
pub struct ReadSource<R> {
    reader: R,
    buffer: String,
    pos: usize,
    lines_read: usize,
    exhausted: bool,
}

impl<R: BufRead> ReadSource<R> {
    /// Creates a source over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            pos: 0,
            lines_read: 0,
            exhausted: false,
        }
    }

    /// Refills the line buffer when the current one has been consumed.
    fn fill(&mut self) -> Result<(), LexError> {
        while self.pos >= self.buffer.len() && !self.exhausted {
            self.buffer.clear();
            self.pos = 0;
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .map_err(|source| LexError::Read {
                    line: self.lines_read + 1,
                    source,
                })?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.lines_read += 1;
            }
        }
        Ok(())
    }
}

impl<R: BufRead> CharSource for ReadSource<R> {
    type Error = LexError;

    fn peek_char(&mut self) -> Result<Option<char>, LexError> {
        self.fill()?;
        Ok(self.buffer[self.pos..].chars().next())
    }

    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        let ch = self.peek_char()?;
        if let Some(ch) = ch {
            self.pos += ch.len_utf8();
        }
        Ok(ch)
    }
}
