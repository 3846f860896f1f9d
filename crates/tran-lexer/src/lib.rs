// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # tran-lexer
//!
//! Word scanner for the Tran language.
//!
//! Source text is read word by word and each word becomes a [`Token`]:
//! a reserved keyword (`if`, `else`, `while`, `return`), a plain word,
//! or a newline marker.
//!
//! ## Quick Start
//!
//! ```rust
//! use tran_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("if hello world");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].text, "hello");
//! ```
//!
//! Streaming from a file or any other [`std::io::BufRead`]:
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use tran_lexer::Scanner;
//!
//! let file = BufReader::new(File::open("main.tran")?);
//! let tokens = Scanner::from_reader(file).scan()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;

pub use error::{LexError, Result};
pub use lexer::{KeywordSet, ScanOptions, Scanner, Token, TokenKind};

/// Scans an in-memory string into tokens.
///
/// Line and column are 0 on every token. Use [`Scanner::with_options`] for
/// real positions.
pub fn tokenize(source: &str) -> Vec<Token> {
    let Ok(tokens) = Scanner::new(source).scan();
    tokens
}
