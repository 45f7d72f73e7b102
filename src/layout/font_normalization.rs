//! Normalizes font weight relative to a document's own baseline.
//!
//! [`FontWeight`] encodes the PDF numeric weight scale (100-900), but PDF
//! producers are inconsistent: some documents use 400/700 for body/bold,
//! others emit 350/600, and scanned-then-reflowed PDFs sometimes carry no
//! weight variation at all even though the rendered glyphs clearly differ in
//! stroke width. Classifying "is this bold" by the PDF scale alone
//! mislabels such documents. This module instead clusters the font sizes
//! and weights actually present in a document and classifies spans relative
//! to the most common ("body") cluster.

use std::collections::HashMap;

use crate::layout::text_block::{FontWeight, TextSpan, WritingMode};

/// Coarse role a span plays relative to the document's body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanType {
    /// Matches the document's dominant font size and weight.
    Body,
    /// Same size as body text but heavier weight.
    Bold,
    /// Noticeably larger than body text (heading candidate).
    Heading,
    /// Noticeably smaller than body text (footnote/caption candidate).
    Small,
}

/// A span annotated with its role relative to the document baseline.
#[derive(Debug, Clone)]
pub struct NormalizedSpan {
    pub text: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub span_type: SpanType,
}

/// How far (in points) a font size must differ from the body size to count
/// as a heading or a small-text span rather than body text.
const SIZE_TOLERANCE_PT: f32 = 0.5;

/// Derives a document's body font size/weight from a span population and
/// classifies spans against it.
pub struct FontWeightNormalizer {
    body_font_size: f32,
    body_font_weight: FontWeight,
}

impl FontWeightNormalizer {
    /// Build a normalizer from the most frequent (size, weight) pair across
    /// `spans`. Falls back to 12pt/Normal if `spans` is empty.
    pub fn from_spans(spans: &[TextSpan]) -> Self {
        let mut counts: HashMap<(u32, FontWeight), usize> = HashMap::new();
        for span in spans {
            let key = (size_bucket(span.font_size), span.font_weight);
            *counts.entry(key).or_insert(0) += 1;
        }

        let (body_font_size, body_font_weight) = counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|((size_bucket, weight), _)| (size_bucket as f32 / 10.0, weight))
            .unwrap_or((12.0, FontWeight::Normal));

        Self { body_font_size, body_font_weight }
    }

    pub fn body_font_size(&self) -> f32 {
        self.body_font_size
    }

    pub fn body_font_weight(&self) -> FontWeight {
        self.body_font_weight
    }

    /// Classify one span's role relative to the body baseline.
    pub fn classify(&self, span: &TextSpan) -> SpanType {
        let delta = span.font_size - self.body_font_size;
        if delta > SIZE_TOLERANCE_PT {
            SpanType::Heading
        } else if delta < -SIZE_TOLERANCE_PT {
            SpanType::Small
        } else if span.font_weight.is_bold() && !self.body_font_weight.is_bold() {
            SpanType::Bold
        } else {
            SpanType::Body
        }
    }

    /// Classify every span, producing [`NormalizedSpan`]s.
    pub fn normalize(&self, spans: &[TextSpan]) -> Vec<NormalizedSpan> {
        spans
            .iter()
            .map(|span| NormalizedSpan {
                text: span.text.clone(),
                font_size: span.font_size,
                font_weight: span.font_weight,
                span_type: self.classify(span),
            })
            .collect()
    }
}

/// Round to the nearest 0.1pt so near-identical sizes (12.0 vs 12.001) land
/// in the same bucket when counting.
fn size_bucket(size: f32) -> u32 {
    (size * 10.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::text_block::Color;

    fn span(text: &str, size: f32, bold: bool) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            bbox: Rect::new(0.0, 0.0, 10.0, size),
            font_name: "Helvetica".to_string(),
            font_size: size,
            font_weight: if bold { FontWeight::Bold } else { FontWeight::Normal },
            is_italic: false,
            color: Color::black(),
            mcid: None,
            sequence: 0,
            split_boundary_before: false,
            offset_semantic: false,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 100.0,
            primary_detected: false,
            writing_mode: WritingMode::Horizontal,
        }
    }

    #[test]
    fn dominant_size_becomes_body_baseline() {
        let spans =
            vec![span("a", 12.0, false), span("b", 12.0, false), span("c", 12.0, false), span("Title", 24.0, true)];
        let normalizer = FontWeightNormalizer::from_spans(&spans);
        assert_eq!(normalizer.body_font_size(), 12.0);
        assert_eq!(normalizer.body_font_weight(), FontWeight::Normal);
    }

    #[test]
    fn larger_span_classifies_as_heading() {
        let spans = vec![span("a", 12.0, false), span("b", 12.0, false), span("Title", 24.0, true)];
        let normalizer = FontWeightNormalizer::from_spans(&spans);
        assert_eq!(normalizer.classify(&span("Title", 24.0, true)), SpanType::Heading);
    }

    #[test]
    fn smaller_span_classifies_as_small() {
        let spans = vec![span("a", 12.0, false), span("b", 12.0, false), span("note", 8.0, false)];
        let normalizer = FontWeightNormalizer::from_spans(&spans);
        assert_eq!(normalizer.classify(&span("note", 8.0, false)), SpanType::Small);
    }

    #[test]
    fn same_size_heavier_weight_classifies_as_bold() {
        let spans = vec![span("a", 12.0, false), span("b", 12.0, false), span("emph", 12.0, true)];
        let normalizer = FontWeightNormalizer::from_spans(&spans);
        assert_eq!(normalizer.classify(&span("emph", 12.0, true)), SpanType::Bold);
    }

    #[test]
    fn body_weight_spans_classify_as_body() {
        let spans = vec![span("a", 12.0, false), span("b", 12.0, false)];
        let normalizer = FontWeightNormalizer::from_spans(&spans);
        assert_eq!(normalizer.classify(&span("c", 12.0, false)), SpanType::Body);
    }

    #[test]
    fn empty_span_list_falls_back_to_default_baseline() {
        let normalizer = FontWeightNormalizer::from_spans(&[]);
        assert_eq!(normalizer.body_font_size(), 12.0);
        assert_eq!(normalizer.body_font_weight(), FontWeight::Normal);
    }
}
