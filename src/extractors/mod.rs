//! Text and content extraction from PDF documents.

pub mod gap_statistics;
pub mod pattern_detector;
pub mod structured;
pub mod text;

pub use gap_statistics::AdaptiveThresholdConfig;
pub use pattern_detector::{PatternDetector, PatternPreservationConfig};
pub use structured::{
    BoundingBox, DocumentElement, DocumentMetadata, ExtractorConfig, ListItem, StructuredDocument,
    StructuredExtractor, TextAlignment, TextStyle,
};
pub use text::{SpanMergingConfig, TextExtractionConfig, TextExtractor};
