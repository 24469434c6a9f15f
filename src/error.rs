//! Error types for the SRLE codec
//!
//! Provides a unified error type for all operations. Decode-time variants carry
//! the byte offset at which the fault was detected, measured in bytes consumed
//! from the input stream.

use thiserror::Error;

/// Result type alias using SrleError
pub type Result<T> = std::result::Result<T, SrleError>;

/// Unified error type for SRLE operations
#[derive(Debug, Error)]
pub enum SrleError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    /// Invalid separator at construction, or encode without an explicit separator
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// Separator mismatch or failed auto-detection
    #[error("{message} at offset {offset}")]
    Separator { message: String, offset: u64 },

    /// Stream ended where a mandatory byte was expected
    #[error("Expected {expected} at offset {offset}")]
    TruncatedInput { expected: &'static str, offset: u64 },

    /// Malformed escape sequence (missing 'x', missing digits, invalid hex)
    #[error("{message} at offset {offset}")]
    EscapeFormat { message: String, offset: u64 },

    /// No decimal digits where a run count was expected
    #[error("Expected numeric value at offset {offset}")]
    MissingCount { offset: u64 },
}
