//! Word boundary rules for right-to-left scripts (Arabic, Hebrew).
//!
//! Arabic letters join into a single connected glyph run within a word, so
//! adjacent Arabic code points should not split just because they are
//! separate characters. A transition into or out of an RTL script, however,
//! almost always marks a word boundary (e.g. a Latin-script PDF field
//! bumping up against Arabic body text).

use crate::text::word_boundary::{BoundaryContext, CharacterInfo};

fn is_rtl(code: u32) -> bool {
    // Hebrew + Arabic block, Arabic Presentation Forms-A.
    (0x0590..=0x08FF).contains(&code) || (0xFB1D..=0xFDFF).contains(&code)
}

/// Decide whether an RTL-aware boundary rule applies between `prev` and
/// `curr`. Returns `None` when neither character is RTL, deferring to the
/// caller's other signals.
pub fn should_split_at_rtl_boundary(
    prev: &CharacterInfo,
    curr: &CharacterInfo,
    _context: Option<&BoundaryContext>,
) -> Option<bool> {
    let prev_rtl = is_rtl(prev.code);
    let curr_rtl = is_rtl(curr.code);

    if !prev_rtl && !curr_rtl {
        return None;
    }

    if prev_rtl != curr_rtl {
        // Script transition: Latin <-> Arabic/Hebrew is a word boundary.
        return Some(true);
    }

    // Both RTL: letters join visually within a word, defer to geometry/TJ
    // offset signals for the actual break rather than forcing one here.
    None
}
