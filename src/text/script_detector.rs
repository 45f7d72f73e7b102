//! CJK script-transition boundary rules.
//!
//! Japanese text freely mixes Han (kanji), Hiragana, and Katakana within a
//! single word (okurigana: a kanji stem followed by hiragana inflection),
//! so a script change alone cannot be treated as a boundary the way it can
//! for, say, Latin-to-Arabic text. Korean Hangul syllables are already
//! complete within a single code point, so adjacent Hangul never needs a
//! boundary from script alone. This module captures those script-specific
//! exceptions; anything not covered defers to the caller's other signals.

use crate::text::word_boundary::CharacterInfo;

/// The document-level language hint, used to disambiguate CJK scripts that
/// overlap in Unicode ranges (Han is shared by Chinese, Japanese, and
/// Korean hanja).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLanguage {
    Japanese,
    Korean,
    Chinese,
}

/// The specific CJK script a code point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjkScript {
    Han,
    Hiragana,
    Katakana,
    Hangul,
}

/// Classify a code point's CJK script, if any.
pub fn detect_cjk_script(code: u32) -> Option<CjkScript> {
    if (0x4E00..=0x9FFF).contains(&code) || (0x3400..=0x4DBF).contains(&code) {
        Some(CjkScript::Han)
    } else if (0x3040..=0x309F).contains(&code) {
        Some(CjkScript::Hiragana)
    } else if (0x30A0..=0x30FF).contains(&code) {
        Some(CjkScript::Katakana)
    } else if (0xAC00..=0xD7A3).contains(&code) || (0x1100..=0x11FF).contains(&code) {
        Some(CjkScript::Hangul)
    } else {
        None
    }
}

/// Japanese-specific script-transition rule.
///
/// Hiragana <-> Katakana is a genuine boundary (distinct words rendered in
/// different kana). Han -> Kana is left undecided so okurigana (kanji stem
/// + hiragana inflection, e.g. "食べる") stays fused with its stem. Kana ->
/// Han is a boundary, since a new word almost always starts at the kanji.
pub fn handle_japanese_text(
    _prev: &CharacterInfo,
    _curr: &CharacterInfo,
    prev_script: Option<CjkScript>,
    curr_script: Option<CjkScript>,
) -> Option<bool> {
    match (prev_script, curr_script) {
        (Some(CjkScript::Hiragana), Some(CjkScript::Katakana))
        | (Some(CjkScript::Katakana), Some(CjkScript::Hiragana)) => Some(true),
        (Some(CjkScript::Han), Some(CjkScript::Hiragana)) | (Some(CjkScript::Han), Some(CjkScript::Katakana)) => None,
        (Some(CjkScript::Hiragana), Some(CjkScript::Han)) | (Some(CjkScript::Katakana), Some(CjkScript::Han)) => {
            Some(true)
        }
        _ => None,
    }
}

/// Korean-specific script-transition rule. Hangul syllable blocks already
/// encode a full syllable per code point, so adjacent Hangul within a word
/// never splits on script alone.
pub fn handle_korean_text(
    _prev: &CharacterInfo,
    _curr: &CharacterInfo,
    prev_script: Option<CjkScript>,
    curr_script: Option<CjkScript>,
) -> Option<bool> {
    match (prev_script, curr_script) {
        (Some(CjkScript::Hangul), Some(CjkScript::Hangul)) => Some(false),
        _ => None,
    }
}

/// Generic script-transition rule used when no document language hint
/// (or a non-CJK one) narrows the decision: a transition between two
/// distinct, known scripts is a boundary.
pub fn should_split_on_script_transition(
    prev_script: Option<CjkScript>,
    curr_script: Option<CjkScript>,
    _document_language: Option<DocumentLanguage>,
) -> Option<bool> {
    match (prev_script, curr_script) {
        (Some(a), Some(b)) if a != b => Some(true),
        _ => None,
    }
}
