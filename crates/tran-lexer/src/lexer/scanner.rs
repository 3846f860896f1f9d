// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that classifies words into tokens.

use std::io::BufRead;

use tracing::{debug, trace};

use super::keywords::KeywordSet;
use super::reader::{NEWLINE, TextReader, Word};
use super::source::{CharSource, ReadSource, StrSource};
use super::{Token, TokenKind};

/// Options controlling how tokens are stamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Record the real 1-based line and column of each token.
    ///
    /// When off, every token carries line 0 and column 0.
    pub track_positions: bool,
}

impl ScanOptions {
    /// Options with position tracking enabled.
    pub fn tracked() -> Self {
        Self {
            track_positions: true,
        }
    }
}

/// A scanner that tokenizes Tran source text.
pub struct Scanner<'k, S> {
    reader: TextReader<S>,
    keywords: &'k KeywordSet,
    options: ScanOptions,
}

impl<'a> Scanner<'static, StrSource<'a>> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_source(StrSource::new(source), KeywordSet::standard())
    }
}

impl<R: BufRead> Scanner<'static, ReadSource<R>> {
    /// Creates a scanner that streams its input from `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self::with_source(ReadSource::new(reader), KeywordSet::standard())
    }
}

impl<'k, S: CharSource> Scanner<'k, S> {
    /// Creates a scanner over any character source and keyword set.
    pub fn with_source(source: S, keywords: &'k KeywordSet) -> Self {
        Self {
            reader: TextReader::new(source),
            keywords,
            options: ScanOptions::default(),
        }
    }

    /// Replaces the scan options.
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, S::Error> {
        let Some(word) = self.reader.next_word()? else {
            return Ok(None);
        };
        let token = self.classify(word);
        trace!(kind = %token.kind, text = %token.text.escape_debug(), "token");
        Ok(Some(token))
    }

    /// Scans the whole input and returns the tokens in source order.
    pub fn scan(mut self) -> Result<Vec<Token>, S::Error> {
        debug!(options = ?self.options, "scan started");
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!(count = tokens.len(), "scan finished");
        Ok(tokens)
    }

    fn classify(&self, word: Word) -> Token {
        let kind = if word.text == NEWLINE {
            TokenKind::Newline
        } else if self.keywords.contains(&word.text) {
            TokenKind::Keyword
        } else {
            TokenKind::Word
        };

        let (line, column) = if self.options.track_positions {
            (word.line, word.column)
        } else {
            (0, 0)
        };

        Token::new(kind, word.text, line, column)
    }
}

impl<S: CharSource> Iterator for Scanner<'_, S> {
    type Item = Result<Token, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
