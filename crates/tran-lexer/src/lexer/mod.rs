// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Tran source text.
//!
//! Input is split into whitespace-delimited words, and each word is
//! classified as a keyword, a plain word or a newline.
//!
//! ## Structure
//!
//! - `source.rs` - `CharSource` and its in-memory and streaming implementations
//! - `reader.rs` - `TextReader`, which turns characters into words
//! - `keywords.rs` - the reserved word table
//! - `scanner.rs` - `Scanner`, which classifies words into tokens
//! - `token.rs` - `Token` and `TokenKind` definitions
//!
//! ## Usage
//!
//! ```rust
//! use tran_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("if ready\nreturn");
//!
//! while let Ok(Some(token)) = scanner.next_token() {
//!     if token.kind == TokenKind::Newline {
//!         continue;
//!     }
//!     println!("{}", token);
//! }
//! ```

mod keywords;
mod reader;
mod scanner;
mod source;
mod token;

pub use keywords::{KeywordSet, RESERVED_WORDS};
pub use reader::{TextReader, Word, is_word_break};
pub use scanner::{ScanOptions, Scanner};
pub use source::{CharSource, ReadSource, StrSource};
pub use token::{Token, TokenKind};
