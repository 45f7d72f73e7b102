//! Plain-text output conversion from ordered spans.
//!
//! Mirrors the merge semantics used by the page-level accessors: spans already
//! placed in reading order are grouped into lines by Y-coordinate tolerance,
//! then joined left-to-right within each line, inserting a space where the
//! horizontal gap between consecutive runs exceeds a threshold proportional
//! to font size (the same geometric-gap fallback used when no font metrics
//! are available, see [`crate::extractors::text`]).

use crate::converters::whitespace::cleanup_plain_text;
use crate::error::Result;
use crate::pipeline::config::TextPipelineConfig;
use crate::pipeline::ordered_span::OrderedTextSpan;

/// Y-coordinate tolerance (in points) for treating two spans as the same line.
const LINE_Y_TOLERANCE: f32 = 2.0;

/// Fraction of font size used as the geometric-gap threshold for inserting a
/// space between two runs on the same line, absent font glyph metrics.
const GAP_SPACE_RATIO: f32 = 0.25;

/// Converts a page's ordered spans into a single output string.
///
/// Implementations operate purely on [`OrderedTextSpan`] and the pipeline
/// configuration; they never re-enter PDF parsing.
pub trait OutputConverter {
    /// Convert ordered spans into output text.
    fn convert(&self, spans: &[OrderedTextSpan], config: &TextPipelineConfig) -> Result<String>;
}

/// Plain-text converter: one physical line of text per row, no markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextConverter;

impl PlainTextConverter {
    /// Create a new plain-text converter.
    pub fn new() -> Self {
        Self
    }
}

impl OutputConverter for PlainTextConverter {
    fn convert(&self, spans: &[OrderedTextSpan], _config: &TextPipelineConfig) -> Result<String> {
        if spans.is_empty() {
            return Ok(String::new());
        }

        let mut ordered: Vec<&OrderedTextSpan> = spans.iter().collect();
        ordered.sort_by_key(|s| s.reading_order);

        let lines = group_into_lines(&ordered);

        let mut output = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&join_line(line));
        }

        Ok(cleanup_plain_text(&output))
    }
}

/// Group spans, already in reading order, into lines by Y-coordinate proximity.
///
/// Grounded in [`crate::pipeline::ordered_span::OrderedSpans::group_into_lines`],
/// adapted to operate on borrowed spans already sorted by reading order instead
/// of re-sorting by Y (reading order already reflects the document's line flow,
/// including multi-column layouts where a strict Y sort would interleave columns).
fn group_into_lines<'a>(spans: &[&'a OrderedTextSpan]) -> Vec<Vec<&'a OrderedTextSpan>> {
    if spans.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<Vec<&OrderedTextSpan>> = Vec::new();
    let mut current_line: Vec<&OrderedTextSpan> = vec![spans[0]];
    let mut current_y = spans[0].span.bbox.y;

    for span in spans.iter().skip(1) {
        if (current_y - span.span.bbox.y).abs() <= LINE_Y_TOLERANCE {
            current_line.push(span);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = vec![span];
            current_y = span.span.bbox.y;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Join the spans of a single line left-to-right, inserting a space where the
/// horizontal gap between consecutive runs exceeds the font-proportional
/// threshold.
fn join_line(line: &[&OrderedTextSpan]) -> String {
    let mut sorted: Vec<&OrderedTextSpan> = line.to_vec();
    sorted.sort_by(|a, b| {
        a.span
            .bbox
            .x
            .partial_cmp(&b.span.bbox.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut text = String::new();
    let mut prev_end_x: Option<f32> = None;

    for span in sorted {
        if let Some(end_x) = prev_end_x {
            let gap = span.span.bbox.x - end_x;
            let threshold = span.span.font_size * GAP_SPACE_RATIO;
            if gap > threshold && !text.ends_with(' ') && !span.span.text.starts_with(' ') {
                text.push(' ');
            }
        }
        text.push_str(&span.span.text);
        prev_end_x = Some(span.span.bbox.x + span.span.bbox.width);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::{Color, FontWeight, TextSpan, WritingMode};
    use crate::pipeline::ordered_span::{OrderedTextSpan, ReadingOrderInfo};

    fn make_span(text: &str, x: f32, y: f32, width: f32, font_size: f32, order: usize) -> OrderedTextSpan {
        let span = TextSpan {
            text: text.to_string(),
            bbox: Rect { x, y, width, height: font_size },
            font_name: "Helvetica".to_string(),
            font_size,
            font_weight: FontWeight::Normal,
            is_italic: false,
            color: Color::new(0.0, 0.0, 0.0),
            mcid: None,
            sequence: order,
            split_boundary_before: false,
            offset_semantic: false,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 100.0,
            primary_detected: false,
            writing_mode: WritingMode::Horizontal,
        };
        OrderedTextSpan::with_info(span, order, ReadingOrderInfo::simple())
    }

    #[test]
    fn empty_spans_produce_empty_string() {
        let converter = PlainTextConverter::new();
        let config = TextPipelineConfig::default();
        assert_eq!(converter.convert(&[], &config).unwrap(), "");
    }

    #[test]
    fn joins_same_line_words_with_a_space() {
        let spans = vec![
            make_span("Hello", 0.0, 700.0, 30.0, 12.0, 0),
            make_span("world", 35.0, 700.0, 30.0, 12.0, 1),
        ];
        let converter = PlainTextConverter::new();
        let config = TextPipelineConfig::default();
        let output = converter.convert(&spans, &config).unwrap();
        assert_eq!(output, "Hello world");
    }

    #[test]
    fn does_not_duplicate_space_already_present() {
        let spans = vec![
            make_span("Hello ", 0.0, 700.0, 35.0, 12.0, 0),
            make_span("world", 35.0, 700.0, 30.0, 12.0, 1),
        ];
        let converter = PlainTextConverter::new();
        let config = TextPipelineConfig::default();
        let output = converter.convert(&spans, &config).unwrap();
        assert_eq!(output, "Hello world");
    }

    #[test]
    fn different_lines_are_separated_by_newline() {
        let spans = vec![
            make_span("Line one", 0.0, 700.0, 60.0, 12.0, 0),
            make_span("Line two", 0.0, 680.0, 60.0, 12.0, 1),
        ];
        let converter = PlainTextConverter::new();
        let config = TextPipelineConfig::default();
        let output = converter.convert(&spans, &config).unwrap();
        assert_eq!(output, "Line one\nLine two");
    }

    #[test]
    fn small_gap_within_word_does_not_insert_space() {
        // Kerning-sized gap (well under the font-proportional threshold)
        let spans = vec![
            make_span("Wo", 0.0, 700.0, 14.0, 12.0, 0),
            make_span("rd", 14.5, 700.0, 12.0, 12.0, 1),
        ];
        let converter = PlainTextConverter::new();
        let config = TextPipelineConfig::default();
        let output = converter.convert(&spans, &config).unwrap();
        assert_eq!(output, "Word");
    }
}
