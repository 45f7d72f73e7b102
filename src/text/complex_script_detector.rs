//! Word boundary rules for scripts with dependent vowel signs and viramas.
//!
//! Devanagari, Thai, Khmer, and the other South/Southeast Asian scripts
//! handled here attach combining marks (matras, viramas, tone marks)
//! directly to a base consonant with no intervening space. Treating every
//! code point as an independent word would chop these marks off their base
//! character, so each script gets a narrow "is this a combining mark"
//! check that suppresses a boundary regardless of what geometry/TJ offsets
//! would otherwise suggest.

use crate::text::word_boundary::CharacterInfo;

/// Complex scripts with their own boundary handling, as opposed to the
/// simpler CJK/Latin/RTL cases handled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexScript {
    Devanagari,
    Bengali,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Khmer,
}

/// Unicode block base and the combining-mark sub-ranges (dependent vowel
/// signs, virama, tone/stress marks) relative to that base, for scripts
/// that share the Indic block layout.
struct IndicBlock {
    base: u32,
    end: u32,
    combining_ranges: &'static [(u32, u32)],
}

// Indic scripts encoded in the ISCII-derived layout share relative offsets:
// dependent vowel signs and virama cluster around 0x3E-0x4D from the block
// base, with a secondary stress-mark cluster near 0x51-0x57.
const DEVANAGARI: IndicBlock =
    IndicBlock { base: 0x0900, end: 0x097F, combining_ranges: &[(0x3E, 0x4D), (0x51, 0x57), (0x62, 0x63)] };
const BENGALI: IndicBlock = IndicBlock { base: 0x0980, end: 0x09FF, combining_ranges: &[(0x3E, 0x4D), (0x62, 0x63)] };
const TAMIL: IndicBlock = IndicBlock { base: 0x0B80, end: 0x0BFF, combining_ranges: &[(0x3E, 0x4D)] };
const TELUGU: IndicBlock = IndicBlock { base: 0x0C00, end: 0x0C7F, combining_ranges: &[(0x3E, 0x4D)] };
const KANNADA: IndicBlock = IndicBlock { base: 0x0C80, end: 0x0CFF, combining_ranges: &[(0x3E, 0x4D)] };
const MALAYALAM: IndicBlock = IndicBlock { base: 0x0D00, end: 0x0D7F, combining_ranges: &[(0x3E, 0x4D)] };

fn in_indic_block(code: u32, block: &IndicBlock) -> bool {
    (block.base..=block.end).contains(&code)
}

fn is_indic_combining_mark(code: u32, block: &IndicBlock) -> bool {
    if code < block.base {
        return false;
    }
    let offset = code - block.base;
    block.combining_ranges.iter().any(|&(lo, hi)| offset >= lo && offset <= hi)
}

fn is_thai_combining_mark(code: u32) -> bool {
    matches!(code, 0x0E31 | 0x0E34..=0x0E3A | 0x0E47..=0x0E4E)
}

fn is_khmer_combining_mark(code: u32) -> bool {
    // COENG (virama-equivalent) and dependent vowel signs.
    matches!(code, 0x17B4..=0x17D3)
}

/// Classify a code point's complex script, if any.
pub fn detect_complex_script(code: u32) -> Option<ComplexScript> {
    if in_indic_block(code, &DEVANAGARI) {
        Some(ComplexScript::Devanagari)
    } else if in_indic_block(code, &BENGALI) {
        Some(ComplexScript::Bengali)
    } else if in_indic_block(code, &TAMIL) {
        Some(ComplexScript::Tamil)
    } else if in_indic_block(code, &TELUGU) {
        Some(ComplexScript::Telugu)
    } else if in_indic_block(code, &KANNADA) {
        Some(ComplexScript::Kannada)
    } else if in_indic_block(code, &MALAYALAM) {
        Some(ComplexScript::Malayalam)
    } else if (0x0E00..=0x0E7F).contains(&code) {
        Some(ComplexScript::Thai)
    } else if (0x1780..=0x17FF).contains(&code) {
        Some(ComplexScript::Khmer)
    } else {
        None
    }
}

fn indic_boundary(prev: &CharacterInfo, curr: &CharacterInfo, block: &IndicBlock) -> Option<bool> {
    if is_indic_combining_mark(curr.code, block) || is_indic_combining_mark(prev.code, block) {
        return Some(false);
    }
    None
}

pub fn handle_devanagari_boundary(prev: &CharacterInfo, curr: &CharacterInfo) -> Option<bool> {
    indic_boundary(prev, curr, &DEVANAGARI)
}

/// Shared handler for the remaining Indic scripts (Tamil, Telugu, Kannada,
/// Malayalam, Bengali), which all follow the same combining-mark rule.
pub fn handle_indic_boundary(prev: &CharacterInfo, curr: &CharacterInfo) -> Option<bool> {
    for block in [&BENGALI, &TAMIL, &TELUGU, &KANNADA, &MALAYALAM] {
        if in_indic_block(prev.code, block) || in_indic_block(curr.code, block) {
            if let Some(decision) = indic_boundary(prev, curr, block) {
                return Some(decision);
            }
        }
    }
    None
}

pub fn handle_thai_boundary(prev: &CharacterInfo, curr: &CharacterInfo) -> Option<bool> {
    if is_thai_combining_mark(curr.code) || is_thai_combining_mark(prev.code) {
        return Some(false);
    }
    None
}

pub fn handle_khmer_boundary(prev: &CharacterInfo, curr: &CharacterInfo) -> Option<bool> {
    if is_khmer_combining_mark(curr.code) || is_khmer_combining_mark(prev.code) {
        return Some(false);
    }
    None
}
