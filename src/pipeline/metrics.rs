//! Extraction metrics, collected when `TextPipelineConfig::collect_metrics` is set.

use std::time::Duration;

/// Metrics for a single page's extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionMetrics {
    /// Number of text spans produced before reading-order processing.
    pub span_count: usize,
    /// Number of spans after reading-order processing (merges/splits may change this).
    pub ordered_span_count: usize,
    /// Wall-clock time spent extracting spans from the content stream.
    pub extraction_time: Duration,
    /// Wall-clock time spent applying the reading-order strategy.
    pub reading_order_time: Duration,
}

impl ExtractionMetrics {
    /// Total wall-clock time across extraction and reading-order stages.
    pub fn total_time(&self) -> Duration {
        self.extraction_time + self.reading_order_time
    }
}

/// Aggregate metrics across a batch of pages, e.g. from the extraction orchestrator.
#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    /// Per-page metrics, in page order.
    pub pages: Vec<ExtractionMetrics>,
    /// Number of pages that failed extraction.
    pub failed_pages: usize,
}

impl BatchMetrics {
    /// Create an empty batch metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully extracted page's metrics.
    pub fn record_page(&mut self, metrics: ExtractionMetrics) {
        self.pages.push(metrics);
    }

    /// Record a page that failed extraction.
    pub fn record_failure(&mut self) {
        self.failed_pages += 1;
    }

    /// Total wall-clock time summed across all recorded pages.
    pub fn total_time(&self) -> Duration {
        self.pages.iter().map(|m| m.total_time()).sum()
    }

    /// Average span count per page, or 0 if no pages were recorded.
    pub fn average_span_count(&self) -> f64 {
        if self.pages.is_empty() {
            return 0.0;
        }
        let total: usize = self.pages.iter().map(|m| m.span_count).sum();
        total as f64 / self.pages.len() as f64
    }
}
