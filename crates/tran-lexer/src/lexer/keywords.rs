// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The reserved word table.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Reserved words of the Tran language.
pub const RESERVED_WORDS: [&str; 4] = ["if", "else", "while", "return"];

static STANDARD: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(RESERVED_WORDS));

/// An immutable set of reserved words. Matching is exact and case sensitive.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    words: FxHashSet<&'static str>,
}

impl KeywordSet {
    /// Builds a set from the given words.
    pub fn new(words: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The shared set of Tran reserved words, built on first use.
    pub fn standard() -> &'static KeywordSet {
        &STANDARD
    }

    /// Returns true if `word` is reserved.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The reserved words in alphabetical order.
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }
}
