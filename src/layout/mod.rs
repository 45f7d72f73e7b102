//! Layout analysis algorithms for PDF documents.
//!
//! This module provides algorithms for analyzing document layout:
//! - DBSCAN clustering (characters → words → lines)
//! - Reading order determination
//! - Font clustering and normalization
//! - Bounded text extraction (v0.3.1)

use crate::geometry::Rect;

pub mod clustering;
pub mod document_analyzer;
pub mod reading_order;
pub mod text_block;

// Phase 2: Core architectural components
pub mod bold_validation;
pub mod font_normalization;

// Re-export main types
pub use document_analyzer::{AdaptiveLayoutParams, DocumentProperties};
pub use reading_order::graph_based_reading_order;
pub use text_block::{Color, FontWeight, TextBlock, TextChar, TextSpan, WritingMode};

// Re-export Phase 2 components
pub use bold_validation::{BoldGroup, BoldMarkerDecision, BoldMarkerValidator};
pub use font_normalization::{FontWeightNormalizer, NormalizedSpan, SpanType};

// Note: RectFilterMode, TextSpanSpatial, and TextSpanFiltering are defined below and exported directly

// Bounded text extraction (v0.3.1)

/// Filter mode for bounded text extraction.
///
/// Determines how text spans are selected based on their bounding box
/// relationship with a target region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RectFilterMode {
    /// Include spans that have any overlap with the target rectangle.
    #[default]
    Intersects,
    /// Include only spans that are fully contained within the target rectangle.
    FullyContained,
    /// Include spans where at least the specified fraction (0.0-1.0) overlaps
    /// with the target rectangle.
    MinOverlap(f32),
}

/// Extension trait for spatial filtering of text spans.
pub trait TextSpanSpatial {
    /// Check if this span intersects with the given rectangle.
    fn intersects_rect(&self, rect: &Rect) -> bool;

    /// Check if this span is fully contained within the given rectangle.
    fn contained_in_rect(&self, rect: &Rect) -> bool;

    /// Calculate the overlap fraction (0.0-1.0) with the given rectangle.
    ///
    /// Returns the ratio of the intersection area to this span's area.
    fn overlap_with_rect(&self, rect: &Rect) -> f32;

    /// Check if this span matches the given filter mode for a rectangle.
    fn matches_filter(&self, rect: &Rect, mode: RectFilterMode) -> bool;
}

impl TextSpanSpatial for TextSpan {
    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.bbox.intersects(rect)
    }

    fn contained_in_rect(&self, rect: &Rect) -> bool {
        self.bbox.x >= rect.x
            && self.bbox.y >= rect.y
            && (self.bbox.x + self.bbox.width) <= (rect.x + rect.width)
            && (self.bbox.y + self.bbox.height) <= (rect.y + rect.height)
    }

    fn overlap_with_rect(&self, rect: &Rect) -> f32 {
        let intersection = self.bbox.intersection(rect);
        match intersection {
            Some(inter) => {
                let span_area = self.bbox.width * self.bbox.height;
                if span_area > 0.0 {
                    (inter.width * inter.height) / span_area
                } else {
                    0.0
                }
            },
            None => 0.0,
        }
    }

    fn matches_filter(&self, rect: &Rect, mode: RectFilterMode) -> bool {
        match mode {
            RectFilterMode::Intersects => self.intersects_rect(rect),
            RectFilterMode::FullyContained => self.contained_in_rect(rect),
            RectFilterMode::MinOverlap(threshold) => self.overlap_with_rect(rect) >= threshold,
        }
    }
}

/// Extension trait for filtering collections of text spans.
pub trait TextSpanFiltering {
    /// Filter spans by their spatial relationship with a rectangle.
    fn filter_by_rect(&self, rect: &Rect, mode: RectFilterMode) -> Vec<TextSpan>;

    /// Get text from spans in a rectangular region as a single string.
    fn extract_text_in_rect(&self, rect: &Rect, mode: RectFilterMode) -> String;
}

impl TextSpanFiltering for Vec<TextSpan> {
    fn filter_by_rect(&self, rect: &Rect, mode: RectFilterMode) -> Vec<TextSpan> {
        self.iter()
            .filter(|span| span.matches_filter(rect, mode))
            .cloned()
            .collect()
    }

    fn extract_text_in_rect(&self, rect: &Rect, mode: RectFilterMode) -> String {
        self.filter_by_rect(rect, mode)
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TextSpanFiltering for [TextSpan] {
    fn filter_by_rect(&self, rect: &Rect, mode: RectFilterMode) -> Vec<TextSpan> {
        self.iter()
            .filter(|span| span.matches_filter(rect, mode))
            .cloned()
            .collect()
    }

    fn extract_text_in_rect(&self, rect: &Rect, mode: RectFilterMode) -> String {
        self.filter_by_rect(rect, mode)
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
