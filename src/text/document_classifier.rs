//! Lightweight document-type classification over already-extracted text lines.
//!
//! This sits downstream of the content interpreter: it looks at plain text
//! lines (no positional metadata) and guesses a [`DocumentType`](crate::config::DocumentType)
//! so that [`crate::document::PdfDocument::extract_spans`] can pick a starting
//! [`crate::config::ExtractionProfile`] before the real, position-aware extraction
//! pass runs. It is deliberately cheap: a handful of regex counts over a
//! bounded number of lines, not a general-purpose text classifier.

use crate::config::DocumentType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_CITATION_BRACKET: Regex = Regex::new(r"\[\d{1,3}(,\s*\d{1,3})*\]").unwrap();
    static ref RE_CITATION_PAREN: Regex =
        Regex::new(r"\([A-Z][a-zA-Z]+(\s+(et al\.|&|and)\s+[A-Z][a-zA-Z]+)?,?\s+\d{4}\)").unwrap();
    static ref RE_ET_AL: Regex = Regex::new(r"\bet al\.").unwrap();
    static ref RE_FIGURE_TABLE: Regex = Regex::new(r"(?i)^(figure|fig\.|table)\s+\d+").unwrap();
    static ref RE_SECTION_CLAUSE: Regex = Regex::new(r"(?i)^(section|article)\s+[\divxlc]+").unwrap();
    static ref RE_SUBSECTION: Regex = Regex::new(r"^\d+(\.\d+){1,4}\b").unwrap();
    static ref RE_SECTION_SIGN: Regex = Regex::new(r"§\s*\d").unwrap();
    static ref RE_LEGAL_TERM: Regex =
        Regex::new(r"(?i)\b(whereas|herein|hereinafter|shall|pursuant to|notwithstanding)\b").unwrap();
    static ref RE_FORM_FIELD: Regex = Regex::new(r"^[A-Za-z][A-Za-z \./]{0,30}:\s*$").unwrap();
    static ref RE_FORM_BLANK: Regex = Regex::new(r"_{3,}").unwrap();
    static ref RE_CHECKBOX: Regex = Regex::new(r"[☐☑☒\[\]]\s*$").unwrap();
}

/// Per-category hit counts gathered while classifying a document's lines.
///
/// Exposed for diagnostics; callers that only need the resulting
/// [`DocumentType`] can discard this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    /// Total non-blank lines examined.
    pub lines_examined: usize,
    /// Citation-like or figure/table-caption markers.
    pub academic_hits: usize,
    /// Legal/policy section markers and boilerplate phrases.
    pub policy_hits: usize,
    /// Form-field labels, blanks, and checkboxes.
    pub form_hits: usize,
}

/// Classifies extracted text lines into a broad [`DocumentType`].
///
/// Grounded on [`crate::extractors::pattern_detector::PatternDetector`]'s
/// approach: conservative, regex-driven, single-pass heuristics rather than
/// a trained model. Classification only informs which [`crate::config::ExtractionProfile`]
/// to start with; it never gates correctness.
pub struct DocumentClassifier;

/// A line is considered sampled once this many non-blank lines have been seen;
/// bounds the cost of classification on very long documents.
const MAX_SAMPLE_LINES: usize = 4000;

impl DocumentClassifier {
    /// Classify a document from an iterator of its extracted text lines.
    ///
    /// Returns the inferred [`DocumentType`] alongside the raw hit counts that
    /// produced it. Empty input classifies as [`DocumentType::Generic`].
    pub fn classify_lines<'a, I>(lines: I) -> (DocumentType, ClassificationStats)
    where
        I: Iterator<Item = &'a str>,
    {
        let mut stats = ClassificationStats::default();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if stats.lines_examined >= MAX_SAMPLE_LINES {
                break;
            }
            stats.lines_examined += 1;

            if RE_CITATION_BRACKET.is_match(trimmed)
                || RE_CITATION_PAREN.is_match(trimmed)
                || RE_ET_AL.is_match(trimmed)
                || RE_FIGURE_TABLE.is_match(trimmed)
            {
                stats.academic_hits += 1;
            }

            if RE_SECTION_CLAUSE.is_match(trimmed)
                || RE_SUBSECTION.is_match(trimmed)
                || RE_SECTION_SIGN.is_match(trimmed)
                || RE_LEGAL_TERM.is_match(trimmed)
            {
                stats.policy_hits += 1;
            }

            if RE_FORM_FIELD.is_match(trimmed)
                || RE_FORM_BLANK.is_match(trimmed)
                || RE_CHECKBOX.is_match(trimmed)
            {
                stats.form_hits += 1;
            }
        }

        let doc_type = Self::classify_from_stats(&stats);
        (doc_type, stats)
    }

    fn classify_from_stats(stats: &ClassificationStats) -> DocumentType {
        if stats.lines_examined == 0 {
            return DocumentType::Generic;
        }

        // Ratios rather than absolute counts so short and long documents are
        // judged on the same scale.
        let total = stats.lines_examined as f32;
        let academic_ratio = stats.academic_hits as f32 / total;
        let policy_ratio = stats.policy_hits as f32 / total;
        let form_ratio = stats.form_hits as f32 / total;

        const SIGNAL_THRESHOLD: f32 = 0.02;
        const DOMINANCE_RATIO: f32 = 1.5;

        let signals = [
            (DocumentType::Academic, academic_ratio),
            (DocumentType::Policy, policy_ratio),
            (DocumentType::Form, form_ratio),
        ];

        let mut above_threshold: Vec<(DocumentType, f32)> = signals
            .into_iter()
            .filter(|(_, ratio)| *ratio >= SIGNAL_THRESHOLD)
            .collect();

        match above_threshold.len() {
            0 => DocumentType::Generic,
            1 => above_threshold[0].0,
            _ => {
                above_threshold.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
                let (top_type, top_ratio) = above_threshold[0];
                let (_, second_ratio) = above_threshold[1];
                if top_ratio >= second_ratio * DOMINANCE_RATIO {
                    top_type
                } else {
                    DocumentType::Mixed
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_generic() {
        let (doc_type, stats) = DocumentClassifier::classify_lines(std::iter::empty());
        assert_eq!(doc_type, DocumentType::Generic);
        assert_eq!(stats.lines_examined, 0);
    }

    #[test]
    fn citation_heavy_lines_classify_academic() {
        let lines = vec![
            "Recent work [1, 2] has shown that transformers generalize well.",
            "This builds on (Smith et al., 2020) and related studies.",
            "Figure 3 illustrates the attention pattern across layers.",
            "Plain prose line with no markers at all here.",
        ];
        let (doc_type, stats) = DocumentClassifier::classify_lines(lines.into_iter());
        assert_eq!(doc_type, DocumentType::Academic);
        assert!(stats.academic_hits >= 2);
    }

    #[test]
    fn legal_boilerplate_classifies_policy() {
        let lines = vec![
            "Section 1. Definitions",
            "WHEREAS the parties wish to enter into this agreement,",
            "3.2.1 Notwithstanding the foregoing, the Licensee shall comply.",
            "See § 12 for exceptions.",
        ];
        let (doc_type, _stats) = DocumentClassifier::classify_lines(lines.into_iter());
        assert_eq!(doc_type, DocumentType::Policy);
    }

    #[test]
    fn form_field_labels_classify_form() {
        let lines = vec![
            "Name:",
            "Date of birth: ____________",
            "Signature: ____________",
            "[ ] I agree to the terms",
        ];
        let (doc_type, _stats) = DocumentClassifier::classify_lines(lines.into_iter());
        assert_eq!(doc_type, DocumentType::Form);
    }

    #[test]
    fn mixed_signals_classify_mixed() {
        let lines = vec![
            "Section 1. Scope (see [1] for background)",
            "WHEREAS this policy cites (Doe, 2019) extensively,",
            "3.4 Pursuant to the cited research in [2, 3],",
        ];
        let (doc_type, stats) = DocumentClassifier::classify_lines(lines.into_iter());
        assert!(stats.academic_hits > 0 && stats.policy_hits > 0);
        assert_eq!(doc_type, DocumentType::Mixed);
    }

    #[test]
    fn generic_prose_has_no_dominant_signal() {
        let lines = vec![
            "The quick brown fox jumps over the lazy dog.",
            "It was a bright cold day in April, and the clocks were striking thirteen.",
        ];
        let (doc_type, _stats) = DocumentClassifier::classify_lines(lines.into_iter());
        assert_eq!(doc_type, DocumentType::Generic);
    }
}
