//! Ligature expansion decisions for U+FB00-FB04 (ff, fi, fl, ffi, ffl).
//!
//! PDF fonts frequently substitute a single ligature glyph for the
//! constituent letters it represents. That is fine for rendering but wrong
//! for extracted text: a search for "office" should match text that came
//! from a "ffi" ligature, and word-wrap/hyphenation logic needs to see the
//! individual letters. Splitting unconditionally is also wrong, though - a
//! ligature inside a protected token (a URL, an email address) should stay
//! intact along with the rest of that token. [`LigatureDecisionMaker`]
//! makes that per-occurrence call.

use crate::text::word_boundary::{BoundaryContext, CharacterInfo};

/// Whether a ligature character should be expanded to its component letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LigatureDecision {
    Split,
    Keep,
}

/// Maps a ligature code point to its component letters.
pub fn get_ligature_components(ch: char) -> Option<&'static str> {
    match ch {
        '\u{FB00}' => Some("ff"),
        '\u{FB01}' => Some("fi"),
        '\u{FB02}' => Some("fl"),
        '\u{FB03}' => Some("ffi"),
        '\u{FB04}' => Some("ffl"),
        _ => None,
    }
}

/// Expand a ligature character into its component `(char, width)` pairs,
/// splitting `original_width` evenly across the components. Returns an
/// empty `Vec` for an unrecognized ligature code point, signaling the
/// caller to keep the original glyph intact.
pub fn expand_ligature_to_chars(ligature_char: char, original_width: f32) -> Vec<(char, f32)> {
    let Some(components) = get_ligature_components(ligature_char) else {
        return Vec::new();
    };

    let count = components.chars().count() as f32;
    let component_width = original_width / count;
    components.chars().map(|c| (c, component_width)).collect()
}

/// Decides whether a specific ligature occurrence should be split.
pub struct LigatureDecisionMaker;

impl LigatureDecisionMaker {
    /// `char_info` is the ligature character itself, `context` carries the
    /// active text-state parameters, and `next` is the character
    /// immediately following the ligature in the TJ stream (if any). Splits
    /// by default; keeps the ligature intact only when it is marked
    /// protected (part of a URL/email token that must survive as one unit).
    pub fn decide(char_info: &CharacterInfo, _context: &BoundaryContext, _next: Option<&CharacterInfo>) -> LigatureDecision {
        if char_info.protected_from_split {
            LigatureDecision::Keep
        } else {
            LigatureDecision::Split
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ligature_char_info(code: u32, protected: bool) -> CharacterInfo {
        CharacterInfo {
            code,
            glyph_id: None,
            width: 9.0,
            x_position: 0.0,
            tj_offset: None,
            font_size: 12.0,
            is_ligature: true,
            original_ligature: None,
            protected_from_split: protected,
        }
    }

    #[test]
    fn fi_ligature_has_two_components() {
        assert_eq!(get_ligature_components('\u{FB01}'), Some("fi"));
    }

    #[test]
    fn ffi_ligature_has_three_components() {
        assert_eq!(get_ligature_components('\u{FB03}'), Some("ffi"));
    }

    #[test]
    fn non_ligature_char_has_no_components() {
        assert_eq!(get_ligature_components('a'), None);
    }

    #[test]
    fn expand_splits_width_evenly_across_components() {
        let expanded = expand_ligature_to_chars('\u{FB01}', 10.0);
        assert_eq!(expanded, vec![('f', 5.0), ('i', 5.0)]);
    }

    #[test]
    fn expand_unrecognized_char_returns_empty() {
        assert!(expand_ligature_to_chars('x', 10.0).is_empty());
    }

    #[test]
    fn unprotected_ligature_splits() {
        let info = ligature_char_info(0xFB01, false);
        let context = BoundaryContext::new(12.0);
        assert_eq!(LigatureDecisionMaker::decide(&info, &context, None), LigatureDecision::Split);
    }

    #[test]
    fn protected_ligature_is_kept() {
        let info = ligature_char_info(0xFB01, true);
        let context = BoundaryContext::new(12.0);
        assert_eq!(LigatureDecisionMaker::decide(&info, &context, None), LigatureDecision::Keep);
    }
}
