// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for tran-lexer.

use thiserror::Error;

/// Result type for scans over fallible sources.
pub type Result<T> = std::result::Result<T, LexError>;

/// Errors that can occur while scanning.
///
/// Any character sequence can be classified, so the only failure is the
/// underlying character source itself. In-memory scans never produce this.
#[derive(Error, Debug)]
pub enum LexError {
    /// The character source could not be read (I/O failure or invalid UTF-8)
    #[error("Failed to read source near line {line}: {source}")]
    Read {
        /// Line the source was positioned on
        line: usize,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl LexError {
    /// Line (1-based) the source was on when the read failed.
    pub fn line(&self) -> usize {
        match self {
            LexError::Read { line, .. } => *line,
        }
    }
}
