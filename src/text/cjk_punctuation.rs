//! Boundary strength of CJK punctuation marks.
//!
//! Unlike Latin text, CJK punctuation is rendered with no surrounding space,
//! so [`crate::text::word_boundary::WordBoundaryDetector`] cannot rely on
//! U+0020 to find sentence/clause breaks. Instead each punctuation code
//! point gets a boundary "strength" in `[0.0, 1.0]`: full stops and
//! enumeration commas strongly indicate a break, while bracket pairs that
//! wrap quoted text should stay attached to their contents.

/// Boundary strength for a CJK punctuation code point. Returns `0.0` for
/// non-punctuation or punctuation with no inherent boundary preference.
///
/// `density` is reserved for future document-wide punctuation-density
/// weighting (denser punctuation use, e.g. classical Chinese, could lower
/// the strength of mid-strength marks); it is currently unused.
pub fn get_cjk_punctuation_boundary_score(code: u32, _density: Option<f32>) -> f32 {
    match code {
        // Sentence-ending punctuation: always a boundary.
        0x3002 // IDEOGRAPHIC FULL STOP
        | 0xFF01 // FULLWIDTH EXCLAMATION MARK
        | 0xFF1F // FULLWIDTH QUESTION MARK
        | 0xFF0E // FULLWIDTH FULL STOP
        => 0.95,

        // Enumeration/clause punctuation: strong but not quite sentence-level.
        0x3001 // IDEOGRAPHIC COMMA
        | 0xFF0C // FULLWIDTH COMMA
        | 0xFF1B // FULLWIDTH SEMICOLON
        | 0xFF1A // FULLWIDTH COLON
        => 0.9,

        // Bracket/quote pairs: attach to their contents, no inherent boundary.
        0x3008 | 0x3009 // ANGLE BRACKET
        | 0x300A | 0x300B // DOUBLE ANGLE BRACKET
        | 0x300C | 0x300D // CORNER BRACKET
        | 0x300E | 0x300F // WHITE CORNER BRACKET
        | 0x3010 | 0x3011 // BLACK LENTICULAR BRACKET
        | 0x3014 | 0x3015 // TORTOISE SHELL BRACKET
        | 0xFF08 | 0xFF09 // FULLWIDTH PARENTHESIS
        => 0.0,

        _ => 0.0,
    }
}
