//! # srle
//!
//! A streaming codec for SRLE ("Separated Run-Length Encoding"), a textual
//! run-length format that represents each run of identical bytes as a
//! `<separator><token><count>` tuple.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬───────────────┬──────────────────┐
//! │ SEP (1)  │ TOKEN (1 or 4)│ COUNT (1+ digits)│  ... repeated per run
//! └──────────┴───────────────┴──────────────────┘
//! ```
//!
//! - `SEP`: one ASCII letter or punctuation byte, never a digit or whitespace
//! - `TOKEN`: the run's byte as a literal printable character, or the 4-byte
//!   escape sequence `\xHH` (lowercase hex) for non-printable bytes, the
//!   escape byte, and the separator itself
//! - `COUNT`: the run length as ASCII decimal digits, terminated by the next
//!   non-digit byte (the next `SEP` or end of stream)
//!
//! Empty input encodes to empty output and vice versa. A count of zero is
//! accepted on decode (producing nothing) but never emitted by the encoder.
//!
//! ## Example
//!
//! ```
//! use srle::Srle;
//!
//! let codec = Srle::new(Some('|')).unwrap();
//!
//! let mut encoded = Vec::new();
//! codec.encode(&b"aaabbb\n\n\n\nccc"[..], &mut encoded).unwrap();
//! assert_eq!(encoded, b"|a3|b3|\\x0a4|c3");
//!
//! let mut decoded = Vec::new();
//! codec.decode(&encoded[..], &mut decoded).unwrap();
//! assert_eq!(decoded, b"aaabbb\n\n\n\nccc");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod codec;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use codec::{validate_separator, Srle, ESCAPE};
pub use error::{Result, SrleError};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the srle crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
