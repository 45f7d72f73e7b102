//! Text-processing passes that run over ordered spans before final assembly.

pub mod citations;

pub use citations::{Citation, CitationDetector, CitationType};
