// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Splits a character stream into whitespace-delimited words.

use super::source::CharSource;

/// The text of a newline word.
pub const NEWLINE: &str = "\n";

/// Returns true if `ch` separates words.
///
/// Unicode whitespace, except that no-break spaces (U+00A0, U+2007, U+202F)
/// and NEL (U+0085) stay inside a word. The information separators U+001C to
/// U+001F also end a word.
pub fn is_word_break(ch: char) -> bool {
    (ch.is_whitespace() && !matches!(ch, '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}'))
        || matches!(ch, '\u{1c}'..='\u{1f}')
}

/// A raw word pulled from the source, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The characters of the word, never empty
    pub text: String,
    /// Line (1-based) of the first character
    pub line: usize,
    /// Column (1-based) of the first character
    pub column: usize,
}

/// Pulls words out of a [`CharSource`].
///
/// A word is a maximal run of characters that are not [`is_word_break`].
/// A `\n` is always a word of its own, even when it directly follows other
/// characters.
pub struct TextReader<S> {
    source: S,
    line: usize,
    column: usize,
    finished: bool,
}

impl<S: CharSource> TextReader<S> {
    /// Creates a reader positioned at the start of `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: 1,
            column: 0,
            finished: false,
        }
    }

    /// Returns the next word, or `None` once the source is exhausted.
    ///
    /// A newline that ends a non-empty word is left in the source and comes
    /// back as its own word on the following call. After the source reports
    /// an error the reader returns `None` from then on.
    pub fn next_word(&mut self) -> Result<Option<Word>, S::Error> {
        if self.finished {
            return Ok(None);
        }

        let word = self.read_word();
        if !matches!(word, Ok(Some(_))) {
            self.finished = true;
        }
        word
    }

    fn read_word(&mut self) -> Result<Option<Word>, S::Error> {
        let mut text = String::new();
        let (mut line, mut column) = self.next_position();

        while let Some(ch) = self.source.peek_char()? {
            if ch == '\n' {
                if !text.is_empty() {
                    break;
                }
                self.advance()?;
                return Ok(Some(Word {
                    text: NEWLINE.to_string(),
                    line,
                    column,
                }));
            }

            if is_word_break(ch) {
                self.advance()?;
                if !text.is_empty() {
                    break;
                }
                (line, column) = self.next_position();
                continue;
            }

            text.push(ch);
            self.advance()?;
        }

        if text.is_empty() {
            return Ok(None);
        }

        Ok(Some(Word { text, line, column }))
    }

    /// Line and column the next character will occupy.
    fn next_position(&self) -> (usize, usize) {
        (self.line, self.column + 1)
    }

    fn advance(&mut self) -> Result<Option<char>, S::Error> {
        let ch = self.source.next_char()?;
        match ch {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        Ok(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{CharSource, StrSource};

    fn words(input: &str) -> Vec<String> {
        let mut reader = TextReader::new(StrSource::new(input));
        let mut out = Vec::new();
        while let Ok(Some(word)) = reader.next_word() {
            out.push(word.text);
        }
        out
    }

    #[test]
    fn test_split_on_spaces() {
        assert_eq!(words("if hello world"), ["if", "hello", "world"]);
    }

    #[test]
    fn test_runs_of_whitespace() {
        assert_eq!(words("  a \t\t b  \r c  "), ["a", "b", "c"]);
    }

    #[test]
    fn test_newline_is_own_word() {
        assert_eq!(words("hello\nworld"), ["hello", "\n", "world"]);
        assert_eq!(words("\n\n"), ["\n", "\n"]);
    }

    #[test]
    fn test_newline_after_word() {
        assert_eq!(words("foo\n"), ["foo", "\n"]);
        assert_eq!(words("foo \n"), ["foo", "\n"]);
    }

    #[test]
    fn test_crlf() {
        assert_eq!(words("a\r\nb"), ["a", "\n", "b"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(words("").is_empty());
        assert!(words(" \t\r ").is_empty());
    }

    #[test]
    fn test_end_of_input_is_permanent() {
        let mut reader = TextReader::new(StrSource::new("x"));
        assert!(matches!(reader.next_word(), Ok(Some(w)) if w.text == "x"));
        assert!(matches!(reader.next_word(), Ok(None)));
        assert!(matches!(reader.next_word(), Ok(None)));
    }

    #[test]
    fn test_no_break_spaces_stay_in_word() {
        assert_eq!(words("a\u{a0}b"), ["a\u{a0}b"]);
        assert_eq!(words("a\u{2007}b a\u{202f}b"), ["a\u{2007}b", "a\u{202f}b"]);
        assert_eq!(words("a\u{85}b"), ["a\u{85}b"]);
    }

    #[test]
    fn test_information_separators_split() {
        assert_eq!(words("a\u{1c}b\u{1f}c"), ["a", "b", "c"]);
        assert_eq!(words("a\u{2003}b\u{3000}c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_is_word_break() {
        for ch in [' ', '\t', '\r', '\n', '\u{b}', '\u{c}', '\u{1c}', '\u{1f}', '\u{2003}', '\u{2028}'] {
            assert!(is_word_break(ch), "{ch:?} should break");
        }
        for ch in ['a', '_', '\u{a0}', '\u{85}', '\u{2007}', '\u{202f}', '\u{0}', '\u{1b}'] {
            assert!(!is_word_break(ch), "{ch:?} should not break");
        }
    }

    /// Yields one `a`, then fails.
    struct Flaky {
        sent: bool,
    }

    impl CharSource for Flaky {
        type Error = &'static str;

        fn peek_char(&mut self) -> Result<Option<char>, &'static str> {
            if self.sent { Err("boom") } else { Ok(Some('a')) }
        }

        fn next_char(&mut self) -> Result<Option<char>, &'static str> {
            let ch = self.peek_char()?;
            self.sent = true;
            Ok(ch)
        }
    }

    #[test]
    fn test_error_ends_reading() {
        let mut reader = TextReader::new(Flaky { sent: false });
        assert_eq!(reader.next_word(), Err("boom"));
        assert_eq!(reader.next_word(), Ok(None));
    }

    #[test]
    fn test_positions() {
        let mut reader = TextReader::new(StrSource::new("ab  cd\n  ef"));
        let mut next = || match reader.next_word() {
            Ok(Some(w)) => (w.text, w.line, w.column),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(next(), ("ab".to_string(), 1, 1));
        assert_eq!(next(), ("cd".to_string(), 1, 5));
        assert_eq!(next(), ("\n".to_string(), 1, 7));
        assert_eq!(next(), ("ef".to_string(), 2, 3));
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let mut reader = TextReader::new(StrSource::new("éé x"));
        assert!(matches!(reader.next_word(), Ok(Some(w)) if w.column == 1));
        assert!(matches!(reader.next_word(), Ok(Some(w)) if w.text == "x" && w.column == 4));
    }
}
