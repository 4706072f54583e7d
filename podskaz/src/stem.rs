//! Heuristic Russian suffix stripping.
//!
//! A fixed table of inflectional endings scanned in order; the first entry
//! that matches and leaves a long-enough remainder wins. Deliberately blunt:
//! downstream matching behavior depends on this exact table and ordering,
//! not on morphological correctness. All lengths are in chars, not bytes.

/// Inflectional endings stripped by [`stem`]. Three-char endings precede
/// two-char ones; entries are mutually exclusive by construction, so order
/// only matters in that the first satisfying entry wins.
const SUFFIXES: &[&str] = &[
    "ого", "его", "ому", "ему", "ыми", "ими", "ами", "ями",
    "ая", "яя", "ый", "ий", "ой", "ое", "ее", "ые", "ие",
    "ую", "юю", "ей", "ом", "ем", "ов", "ев", "ам", "ям", "ах", "ях",
];

/// Words at or below this length are returned unchanged when no table entry
/// applies; longer ones lose their last char as a blunt fallback for
/// irregular endings.
const FALLBACK_MIN_LEN: usize = 4;

/// Strip a known inflectional ending from a word.
///
/// Lower-cases the input, then returns the remainder of the first table
/// entry that matches the end of the word and leaves a remainder at least
/// 2 chars longer than the suffix itself. Total: unmatched words come back
/// lower-cased, possibly minus their last char (see [`FALLBACK_MIN_LEN`]).
/// Not guaranteed idempotent.
pub fn stem(word: &str) -> String {
    let mut lower = word.to_lowercase();
    let total = lower.chars().count();

    for &suffix in SUFFIXES {
        if !lower.ends_with(suffix) {
            continue;
        }
        let suffix_len = suffix.chars().count();
        let remainder_len = total - suffix_len;
        if remainder_len >= suffix_len + 2 {
            // Suffixes are proper UTF-8 suffixes, so byte slicing is exact.
            lower.truncate(lower.len() - suffix.len());
            return lower;
        }
    }

    if total > FALLBACK_MIN_LEN {
        lower.pop();
    }

    lower
}
