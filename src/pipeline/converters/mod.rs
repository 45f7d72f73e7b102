//! Post-extraction converters that operate on ordered spans.

pub mod plain_text;
pub mod toc_detector;

pub use plain_text::{OutputConverter, PlainTextConverter};
pub use toc_detector::{TocDetector, TocEntry};
