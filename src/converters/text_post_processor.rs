//! Span-level text cleanup applied after glyph-level extraction.
//!
//! Unlike [`crate::converters::whitespace`], which operates on whole assembled
//! pages of markdown/plain text, this module processes a single already-decoded
//! [`crate::layout::TextSpan`]'s text in isolation — collapsing internal
//! whitespace artifacts and fixing spacing around punctuation that the content
//! interpreter's word-boundary heuristics sometimes introduce.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_MULTI_SPACE: Regex = Regex::new(r" {2,}").unwrap();
    static ref RE_SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([,.;:!?)\]])").unwrap();
    static ref RE_SPACE_AFTER_OPEN: Regex = Regex::new(r"([(\[]) +").unwrap();
}

/// Cleans up a single span's decoded text.
///
/// Grounded in [`crate::converters::whitespace::normalize_horizontal_whitespace`]'s
/// regex-pass style, narrowed to single-line span text rather than a whole
/// document: collapse repeated spaces, drop a stray space before closing
/// punctuation, and drop a stray space right after an opening bracket/paren.
pub struct TextPostProcessor;

impl TextPostProcessor {
    /// Apply the cleanup pipeline to one span's text and return the result.
    pub fn process(text: &str) -> String {
        let collapsed = RE_MULTI_SPACE.replace_all(text, " ");
        let punct_fixed = RE_SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
        let bracket_fixed = RE_SPACE_AFTER_OPEN.replace_all(&punct_fixed, "$1");
        bracket_fixed.trim().to_string()
    }
}
