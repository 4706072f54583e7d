//! Fuzzy match decision between a candidate text and a user query.
//!
//! One ordered decision procedure, shared by whole-string matching and
//! word-level highlighting so that what is highlighted is exactly what
//! matched: substring, then stemmed prefix, then surface edit distance, then
//! stem edit distance. The thresholds are contract, not tuning knobs; the
//! tests pin the behavior they produce.

use crate::distance::distance;
use crate::stem::stem;

/// Minimum stem length (chars) for the stemmed-prefix check.
const STEM_PREFIX_MIN_LEN: usize = 3;
/// Minimum raw word length (chars) before surface edit distance applies.
/// Below this, edit distance is not discriminating.
const SURFACE_MIN_LEN: usize = 4;
/// Share of the longer word's length allowed as surface edits, rounded.
const SURFACE_DISTANCE_FACTOR: f64 = 0.3;
/// Absolute ceiling on surface edits: long words never tolerate more typos
/// than this even when the proportional threshold would allow it.
const SURFACE_DISTANCE_CAP: usize = 2;
/// Minimum stem length (chars) before stem edit distance applies.
const STEM_DISTANCE_MIN_LEN: usize = 3;
/// Maximum allowed edit distance between two stems.
const STEM_DISTANCE_MAX: usize = 1;

/// How a single (query word, text word) pair matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenMatch {
    None,
    Substring,
    StemPrefix,
    Fuzzy(usize),
    StemFuzzy(usize),
}

/// Whether `text` satisfies `query`, case-insensitive.
///
/// Checks, in order, any single success winning: literal substring
/// containment; then for every (query word, text word) pair the word-level
/// rules of [`word_pair_match`]. No match is `false`, never an error.
pub fn matches(text: &str, query: &str) -> bool {
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();

    if text_lower.contains(&query_lower) {
        return true;
    }

    for query_word in query_lower.split_whitespace() {
        for text_word in text_lower.split_whitespace() {
            if word_pair_match(query_word, text_word) != TokenMatch::None {
                return true;
            }
        }
    }

    false
}

/// Token-level decision used by the highlighter: substring containment of
/// the query word, then the [`word_pair_match`] rules. Both inputs must
/// already be lowercased single words.
pub(crate) fn token_match(query_word: &str, text_word: &str) -> TokenMatch {
    if text_word.contains(query_word) {
        return TokenMatch::Substring;
    }
    word_pair_match(query_word, text_word)
}

/// Word-pair decision shared by [`matches`]. Containment is NOT checked
/// here — the whole-string substring pass already covers it for matching,
/// and the highlighter layers it on per token via [`token_match`].
///
/// 1. stemmed prefix, both directions, with the length-3 gate on the prefix;
/// 2. surface edit distance for words of length >= 4, within the rounded
///    proportional threshold and the absolute cap;
/// 3. stem edit distance <= 1 for stems of length >= 3.
fn word_pair_match(query_word: &str, text_word: &str) -> TokenMatch {
    let query_stem = stem(query_word);
    let text_stem = stem(text_word);
    let qs_len = query_stem.chars().count();
    let ts_len = text_stem.chars().count();

    if (qs_len >= STEM_PREFIX_MIN_LEN && text_stem.starts_with(&query_stem))
        || (ts_len >= STEM_PREFIX_MIN_LEN && query_stem.starts_with(&text_stem))
    {
        return TokenMatch::StemPrefix;
    }

    let qw_len = query_word.chars().count();
    let tw_len = text_word.chars().count();
    if qw_len >= SURFACE_MIN_LEN && tw_len >= SURFACE_MIN_LEN {
        let d = distance(query_word, text_word);
        let allowed = max_surface_distance(qw_len.max(tw_len));
        if d <= allowed {
            return TokenMatch::Fuzzy(d);
        }
    }

    if qs_len >= STEM_DISTANCE_MIN_LEN && ts_len >= STEM_DISTANCE_MIN_LEN {
        let d = distance(&query_stem, &text_stem);
        if d <= STEM_DISTANCE_MAX {
            return TokenMatch::StemFuzzy(d);
        }
    }

    TokenMatch::None
}

/// Maximum surface edit distance for a pair whose longer word has the given
/// length: the rounded proportional share, bounded by the absolute cap.
fn max_surface_distance(longer_len: usize) -> usize {
    let proportional = (longer_len as f64 * SURFACE_DISTANCE_FACTOR).round() as usize;
    proportional.min(SURFACE_DISTANCE_CAP)
}
