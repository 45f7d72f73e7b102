//! Adaptive gap-threshold analysis for span merging.
//!
//! [`crate::extractors::SpanMergingConfig::adaptive`] opts into deriving the
//! word-boundary gap threshold from the actual distribution of horizontal
//! gaps observed between text runs on a page, rather than a single fixed
//! value tuned for one document type. This module holds that analysis:
//! [`AdaptiveThresholdConfig`] configures it, [`compute_adaptive_threshold`]
//! runs it.
//!
//! Grounded in [`crate::layout::document_analyzer`]'s percentile-by-sort
//! approach (median font size, median char width) — the same
//! sort-then-index technique, generalized to an arbitrary percentile so a
//! document-type profile can ask for a tighter or looser cut.

/// Tunable parameters for gap-distribution analysis.
///
/// The analysis takes the observed horizontal gaps between adjacent spans on
/// a line, sorts them, and picks `percentile` as the candidate word-boundary
/// threshold, clamped to `[min_threshold_pt, max_threshold_pt]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveThresholdConfig {
    /// Percentile (0.0-1.0) of the sorted gap distribution used as the
    /// candidate threshold. Gaps below this percentile are assumed to be
    /// character kerning rather than word boundaries.
    pub percentile: f32,
    /// Lower clamp for the derived threshold, in points.
    pub min_threshold_pt: f32,
    /// Upper clamp for the derived threshold, in points.
    pub max_threshold_pt: f32,
    /// Threshold used when fewer than two gap samples are available.
    pub fallback_threshold_pt: f32,
}

impl Default for AdaptiveThresholdConfig {
    /// Balanced defaults: median gap, clamped to a sane range for 8-14pt body text.
    fn default() -> Self {
        Self {
            percentile: 0.5,
            min_threshold_pt: 0.5,
            max_threshold_pt: 4.0,
            fallback_threshold_pt: 1.0,
        }
    }
}

impl AdaptiveThresholdConfig {
    /// Tuned for policy/legal documents: tight, justified text where most
    /// gaps are small and a low percentile with a tight ceiling avoids
    /// treating kerning as a word break.
    pub fn policy_documents() -> Self {
        Self {
            percentile: 0.35,
            min_threshold_pt: 0.3,
            max_threshold_pt: 2.5,
            fallback_threshold_pt: 0.6,
        }
    }

    /// Tuned for academic papers: looser spacing, frequent citation markers
    /// and inline math that widen the gap distribution.
    pub fn academic() -> Self {
        Self {
            percentile: 0.55,
            min_threshold_pt: 0.8,
            max_threshold_pt: 5.0,
            fallback_threshold_pt: 1.4,
        }
    }

    /// Tuned for dense layouts (tables, forms) where most gaps are word
    /// boundaries: a high percentile pulls the threshold up so dense but
    /// legitimate multi-word cells don't get fused.
    pub fn aggressive() -> Self {
        Self {
            percentile: 0.65,
            min_threshold_pt: 1.0,
            max_threshold_pt: 6.0,
            fallback_threshold_pt: 2.0,
        }
    }

    /// Tuned for formal documents where false positives (spurious spaces)
    /// are worse than false negatives (a rare fused word): a low percentile
    /// and tight ceiling bias toward not inserting a space.
    pub fn conservative() -> Self {
        Self {
            percentile: 0.25,
            min_threshold_pt: 0.2,
            max_threshold_pt: 2.0,
            fallback_threshold_pt: 0.5,
        }
    }
}

/// Compute an adaptive word-boundary gap threshold from observed gaps.
///
/// `gaps_pt` are horizontal gaps (in points) between adjacent same-line text
/// runs, as encountered during span merging; order does not matter. Returns
/// `config.fallback_threshold_pt` when fewer than two samples are given,
/// since a single gap carries no distribution to analyze.
///
/// # Examples
///
/// ```
/// use pdf_oxide::extractors::gap_statistics::{compute_adaptive_threshold, AdaptiveThresholdConfig};
///
/// let gaps = vec![0.5, 0.6, 0.55, 3.2, 0.58, 3.5, 0.52];
/// let threshold = compute_adaptive_threshold(&gaps, &AdaptiveThresholdConfig::default());
/// assert!(threshold > 0.0);
/// ```
pub fn compute_adaptive_threshold(gaps_pt: &[f32], config: &AdaptiveThresholdConfig) -> f32 {
    if gaps_pt.len() < 2 {
        return config.fallback_threshold_pt;
    }

    let mut sorted: Vec<f32> = gaps_pt.iter().copied().filter(|g| g.is_finite()).collect();
    if sorted.len() < 2 {
        return config.fallback_threshold_pt;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = ((sorted.len() - 1) as f32 * config.percentile.clamp(0.0, 1.0)).round() as usize;
    let raw = sorted[rank.min(sorted.len() - 1)];

    raw.clamp(config.min_threshold_pt, config.max_threshold_pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_samples_returns_fallback() {
        let config = AdaptiveThresholdConfig::default();
        assert_eq!(compute_adaptive_threshold(&[], &config), config.fallback_threshold_pt);
        assert_eq!(compute_adaptive_threshold(&[2.0], &config), config.fallback_threshold_pt);
    }

    #[test]
    fn median_of_tight_gaps_is_near_typical_kerning() {
        let gaps = vec![0.5, 0.6, 0.55, 0.58, 0.52];
        let threshold = compute_adaptive_threshold(&gaps, &AdaptiveThresholdConfig::default());
        assert!((0.5..=0.6).contains(&threshold));
    }

    #[test]
    fn result_is_clamped_to_configured_range() {
        let gaps = vec![100.0, 200.0, 150.0];
        let config = AdaptiveThresholdConfig::default();
        let threshold = compute_adaptive_threshold(&gaps, &config);
        assert_eq!(threshold, config.max_threshold_pt);

        let gaps_small = vec![0.01, 0.02, 0.015];
        let threshold_small = compute_adaptive_threshold(&gaps_small, &config);
        assert_eq!(threshold_small, config.min_threshold_pt);
    }

    #[test]
    fn policy_profile_is_tighter_than_aggressive() {
        let gaps = vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
        let policy = compute_adaptive_threshold(&gaps, &AdaptiveThresholdConfig::policy_documents());
        let aggressive = compute_adaptive_threshold(&gaps, &AdaptiveThresholdConfig::aggressive());
        assert!(policy < aggressive);
    }

    #[test]
    fn non_finite_gaps_are_ignored() {
        let gaps = vec![0.5, f32::NAN, 0.6, f32::INFINITY, 0.55];
        let config = AdaptiveThresholdConfig::default();
        let threshold = compute_adaptive_threshold(&gaps, &config);
        assert!(threshold.is_finite());
    }
}
