//! Structured logging macros for the extraction pipeline.
//!
//! Thin wrappers over the `log` crate that tag every record with the
//! `pdf_oxide::pipeline` target, so extraction-pipeline diagnostics can be
//! filtered independently of the rest of the crate (e.g. `RUST_LOG=pdf_oxide::pipeline=debug`).

/// Log a trace-level message from the extraction pipeline.
#[macro_export]
macro_rules! extract_log_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "pdf_oxide::pipeline", $($arg)*)
    };
}

/// Log a debug-level message from the extraction pipeline.
#[macro_export]
macro_rules! extract_log_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pdf_oxide::pipeline", $($arg)*)
    };
}

/// Log an info-level message from the extraction pipeline.
#[macro_export]
macro_rules! extract_log_info {
    ($($arg:tt)*) => {
        log::info!(target: "pdf_oxide::pipeline", $($arg)*)
    };
}

/// Log a warn-level message from the extraction pipeline.
#[macro_export]
macro_rules! extract_log_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "pdf_oxide::pipeline", $($arg)*)
    };
}

/// Log an error-level message from the extraction pipeline.
#[macro_export]
macro_rules! extract_log_error {
    ($($arg:tt)*) => {
        log::error!(target: "pdf_oxide::pipeline", $($arg)*)
    };
}

pub use crate::{
    extract_log_debug, extract_log_error, extract_log_info, extract_log_trace, extract_log_warn,
};
