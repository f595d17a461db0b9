// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Word orderings selectable from the command line or the config file.

use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Ordering;

/// How two words are compared when looking for the extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
    /// Byte-wise comparison; uppercase sorts before lowercase.
    #[default]
    Lexicographic,
    /// Lexicographic after lowercasing both words.
    CaseInsensitive,
    /// Number of characters. Words of equal length tie.
    Length,
}

impl WordOrder {
    /// Compares `a` with `b` under this ordering.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            WordOrder::Lexicographic => a.cmp(b),
            WordOrder::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
            WordOrder::Length => a.chars().count().cmp(&b.chars().count()),
        }
    }
}

impl std::fmt::Display for WordOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordOrder::Lexicographic => write!(f, "lexicographic"),
            WordOrder::CaseInsensitive => write!(f, "case-insensitive"),
            WordOrder::Length => write!(f, "length"),
        }
    }
}
