// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the Tran scanner.

use std::fmt;

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact text matched
    pub text: String,
    /// Line number, 0 unless position tracking is enabled
    pub line: usize,
    /// Column number, 0 unless position tracking is enabled
    pub column: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.kind {
            TokenKind::Newline => "\\n",
            _ => self.text.as_str(),
        };
        write!(
            f,
            "Token(type={}, value={}, line={}, col={})",
            self.kind, value, self.line, self.column
        )
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word
    Keyword,
    /// Any other run of non-whitespace characters
    Word,
    /// A `\n` line break
    Newline,
}

impl TokenKind {
    /// The upper-case name used in diagnostic output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Word => "WORD",
            TokenKind::Newline => "NEWLINE",
        }
    }

    /// Returns true if this is a keyword token.
    pub fn is_keyword(self) -> bool {
        self == TokenKind::Keyword
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Keyword, "if", 0, 0);
        assert_eq!(token.to_string(), "Token(type=KEYWORD, value=if, line=0, col=0)");
    }

    #[test]
    fn test_newline_display_is_escaped() {
        let token = Token::new(TokenKind::Newline, "\n", 2, 7);
        assert_eq!(token.to_string(), r"Token(type=NEWLINE, value=\n, line=2, col=7)");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let token = Token::new(TokenKind::Word, "don't", 0, 0);
        assert_eq!(token.to_string(), "Token(type=WORD, value=don't, line=0, col=0)");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Keyword.name(), "KEYWORD");
        assert_eq!(TokenKind::Word.to_string(), "WORD");
        assert_eq!(TokenKind::Newline.name(), "NEWLINE");
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::Keyword.is_keyword());
        assert!(!TokenKind::Word.is_keyword());
        assert!(!TokenKind::Newline.is_keyword());
    }
}
