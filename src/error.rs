//! Error types for the PDF library.
//!
//! This module defines all error types that can occur during PDF parsing and processing.

/// Result type alias for PDF library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF processing.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// Invalid PDF header (expected '%PDF-')
    #[error("Invalid PDF header: expected '%PDF-', found '{0}'")]
    InvalidHeader(String),

    /// Unsupported PDF version
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Parse error at specific byte offset
    #[error("Failed to parse object at byte {offset}: {reason}")]
    ParseError {
        /// Byte offset where error occurred
        offset: usize,
        /// Reason for parse failure
        reason: String,
    },

    /// Parse warning (non-fatal)
    #[error("Parse warning at byte {offset}: {message}")]
    ParseWarning {
        /// Byte offset where warning occurred
        offset: usize,
        /// Warning message
        message: String,
    },

    /// Invalid cross-reference table
    #[error("Invalid cross-reference table")]
    InvalidXref,

    /// Referenced object not found in cross-reference table
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Unexpected end of file
    #[error("End of file reached unexpectedly")]
    UnexpectedEof,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error
    #[error("UTF-8 decoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Unsupported feature
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    // Additional error types for later phases
    /// Invalid PDF structure (generic)
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// Stream decoding error
    #[error("Stream decoding error: {0}")]
    Decode(String),

    /// Unsupported stream filter
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),

    /// Font error
    #[error("Font error: {0}")]
    Font(String),

    /// Image error
    #[error("Image error: {0}")]
    Image(String),

    /// Circular reference detected in object graph
    #[error("Circular reference detected: object {0}")]
    CircularReference(crate::object::ObjectRef),

    /// Recursion depth limit exceeded
    #[error("Recursion depth limit exceeded (max: {0})")]
    RecursionLimitExceeded(u32),

    /// Unrecoverable file corruption (syntax broken beyond recovery)
    #[error("Corrupted file during {operation}{}: {reason}", page_suffix(*page))]
    CorruptedFile {
        /// What the reader was attempting
        operation: String,
        /// Page number, if the failure is page-scoped
        page: Option<usize>,
        /// Human-readable reason
        reason: String,
    },

    /// The document is encrypted and no password was supplied
    #[error("Document is encrypted; a password is required for {operation}")]
    Encrypted {
        /// What the reader was attempting
        operation: String,
    },

    /// A supplied password failed to authenticate against /O or /U
    #[error("Invalid password for {operation}")]
    InvalidPassword {
        /// What the reader was attempting
        operation: String,
    },

    /// A stream's declared filter chain failed to decode
    #[error("Malformed stream during {operation}: {reason}")]
    MalformedStream {
        /// What the reader was attempting
        operation: String,
        /// Reason the decoder failed
        reason: String,
    },

    /// A font dictionary could not be constructed
    #[error("Invalid font during {operation}: {reason}")]
    InvalidFont {
        /// What the reader was attempting
        operation: String,
        /// Reason the font could not be built
        reason: String,
    },

    /// An encoding (CMap, base encoding, filter) is not supported
    #[error("Unsupported encoding during {operation}: {reason}")]
    UnsupportedEncoding {
        /// What the reader was attempting
        operation: String,
        /// Name of the unsupported encoding
        reason: String,
    },

    /// A page or stream yielded no extractable content
    #[error("No content available for {operation}{}", page_suffix(*page))]
    NoContent {
        /// What the reader was attempting
        operation: String,
        /// Page number, if applicable
        page: Option<usize>,
    },

    /// Caller-requested cancellation was observed
    #[error("Cancellation requested during {operation}")]
    CancellationRequested {
        /// What was cancelled
        operation: String,
    },

    /// A configured memory budget would be exceeded
    #[error("Memory limit exceeded during {operation}: wanted {requested} bytes, budget {budget} bytes")]
    MemoryLimitExceeded {
        /// What the reader was attempting
        operation: String,
        /// Bytes requested
        requested: usize,
        /// Configured budget
        budget: usize,
    },

    /// A page index was out of range or otherwise invalid
    #[error("Invalid page {page} during {operation}")]
    InvalidPage {
        /// What the reader was attempting
        operation: String,
        /// The offending page index
        page: usize,
    },
}

fn page_suffix(page: Option<usize>) -> String {
    match page {
        Some(p) => format!(" (page {p})"),
        None => String::new(),
    }
}
