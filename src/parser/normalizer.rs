// file: src/parser/normalizer.rs
// description: text canonicalization for accent- and case-insensitive matching
// reference: Unicode canonical decomposition (NFD)

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercases, strips diacritics, maps NBSP to space and collapses whitespace.
///
/// Lowercasing runs before decomposition so that characters whose lowercase
/// form carries a combining mark (`İ`) are stripped in the same pass, which
/// keeps the function idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('\u{a0}', " ");
    let stripped = strip_diacritics(&lowered);
    collapse_whitespace(&stripped)
}

/// Canonical decomposition with combining marks discarded; case is preserved.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
