//! Word-level highlighting of candidate text against the live query.
//!
//! Uses the same word-matching criteria as [`crate::matcher`] so that what
//! is highlighted is exactly what matched. Tokenization is lossless:
//! separator runs (whitespace plus a fixed punctuation set) become their own
//! unmatched segments, so concatenating the segments reproduces the input
//! exactly.

use crate::interface::TextSegment;
use crate::matcher::{token_match, TokenMatch};

/// Punctuation treated as a separator alongside whitespace. Word tokens are
/// maximal runs of everything else.
const SEPARATOR_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '«', '»'];

/// Annotate `text` against `query`, one segment per token, in original
/// order. Empty query (or empty text) produces the whole text as a single
/// unmatched segment.
pub fn highlight(text: &str, query: &str) -> Vec<TextSegment> {
    segments(text, query).collect()
}

/// Lazy form of [`highlight`]: a finite iterator of segments. Restartable by
/// calling again with the same inputs.
pub fn segments(text: &str, query: &str) -> Segments {
    let query_words: Vec<String> = query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    Segments {
        chars: text.chars().collect(),
        pos: 0,
        query_words,
    }
}

/// Iterator over the segments of one highlight call.
#[derive(Debug, Clone)]
pub struct Segments {
    chars: Vec<char>,
    pos: usize,
    query_words: Vec<String>,
}

impl Segments {
    fn is_separator(c: char) -> bool {
        c.is_whitespace() || SEPARATOR_PUNCTUATION.contains(&c)
    }

    fn word_matches_query(&self, token_lower: &str) -> bool {
        self.query_words
            .iter()
            .any(|qw| token_match(qw, token_lower) != TokenMatch::None)
    }
}

impl Iterator for Segments {
    type Item = TextSegment;

    fn next(&mut self) -> Option<TextSegment> {
        if self.pos >= self.chars.len() {
            return None;
        }

        // No query: the remainder of the text as one unmatched segment
        if self.query_words.is_empty() {
            let text: String = self.chars[self.pos..].iter().collect();
            self.pos = self.chars.len();
            return Some(TextSegment { text, matched: false });
        }

        let start = self.pos;
        let in_separator = Self::is_separator(self.chars[start]);
        while self.pos < self.chars.len()
            && Self::is_separator(self.chars[self.pos]) == in_separator
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();

        let matched = !in_separator && self.word_matches_query(&text.to_lowercase());
        Some(TextSegment { text, matched })
    }
}
