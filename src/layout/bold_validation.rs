//! Decides where bold markdown markers (`**...**`) should actually be
//! emitted for a run of text spans.
//!
//! `TextSpan::font_weight` says whether a span's *glyphs* are bold; it says
//! nothing about whether wrapping that span in `**...**` produces sane
//! markdown. A bold-only space between two normal-weight words, or a bold
//! span with no content-bearing characters, should not get markers even
//! though its weight qualifies - that is exactly the `** **` artifact
//! [`crate::pipeline::config::BoldMarkerBehavior::Conservative`] exists to
//! avoid. This module groups adjacent spans by bold state and validates
//! each group against the configured behavior before conversion.

use crate::layout::text_block::{TextSpan, WritingMode};
use crate::pipeline::config::BoldMarkerBehavior;

/// A maximal run of adjacent spans sharing the same bold state.
#[derive(Debug, Clone)]
pub struct BoldGroup {
    /// Index range into the original span slice, end-exclusive.
    pub start: usize,
    pub end: usize,
    pub is_bold: bool,
}

impl BoldGroup {
    fn span_count(&self) -> usize {
        self.end - self.start
    }
}

/// Whether a [`BoldGroup`] should actually get bold markers in the rendered
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoldMarkerDecision {
    pub emit_markers: bool,
}

/// Groups spans by bold state and decides marker emission per group.
pub struct BoldMarkerValidator {
    behavior: BoldMarkerBehavior,
}

impl BoldMarkerValidator {
    pub fn new(behavior: BoldMarkerBehavior) -> Self {
        Self { behavior }
    }

    /// Partition `spans` into maximal runs of constant bold state.
    pub fn group(&self, spans: &[TextSpan]) -> Vec<BoldGroup> {
        let mut groups = Vec::new();
        let mut iter = spans.iter().enumerate();
        let Some((_, first)) = iter.next() else { return groups };

        let mut start = 0;
        let mut current = first.font_weight.is_bold();
        let mut last_index = 0;

        for (i, span) in iter {
            let is_bold = span.font_weight.is_bold();
            if is_bold != current {
                groups.push(BoldGroup { start, end: i, is_bold: current });
                start = i;
                current = is_bold;
            }
            last_index = i;
        }
        groups.push(BoldGroup { start, end: last_index + 1, is_bold: current });
        groups
    }

    /// Decide whether `group` should get bold markers, given the spans it
    /// was computed from.
    pub fn validate(&self, group: &BoldGroup, spans: &[TextSpan]) -> BoldMarkerDecision {
        if !group.is_bold {
            return BoldMarkerDecision { emit_markers: false };
        }

        let text: String = spans[group.start..group.end].iter().map(|s| s.text.as_str()).collect();
        let has_content = text.trim().chars().any(|c| !c.is_whitespace());

        let emit_markers = match self.behavior {
            BoldMarkerBehavior::Aggressive => group.span_count() > 0,
            BoldMarkerBehavior::Conservative => has_content,
        };

        BoldMarkerDecision { emit_markers }
    }

    /// Group and validate in one pass, returning a decision per group.
    pub fn evaluate(&self, spans: &[TextSpan]) -> Vec<(BoldGroup, BoldMarkerDecision)> {
        self.group(spans)
            .into_iter()
            .map(|group| {
                let decision = self.validate(&group, spans);
                (group, decision)
            })
            .collect()
    }
}
