//! SRLE Codec
//!
//! Owns the separator configuration and the printable-byte table, and exposes
//! the streaming [`encode`](Srle::encode) and [`decode`](Srle::decode)
//! operations. Construction validates the separator; an invalid separator
//! means no codec instance is ever produced.

mod decoder;
mod encoder;
mod reader;
mod separator;

pub use separator::validate_separator;

use crate::error::{Result, SrleError};

/// The fixed escape byte introducing a `\xHH` token
pub const ESCAPE: u8 = b'\\';

/// SRLE codec instance
///
/// Holds an immutable separator choice and the printable set derived from it.
/// `separator == None` means the decoder infers the separator from the first
/// input byte; encoding then fails with a configuration error.
#[derive(Debug)]
pub struct Srle {
    separator: Option<u8>,

    /// Bytes that may appear literally in a token: ASCII digits, letters and
    /// punctuation, minus the escape byte and the separator
    printable: [bool; 256],
}

impl Srle {
    /// Create a codec with the given separator, or `None` for decode-time
    /// auto-detection
    pub fn new(separator: Option<char>) -> Result<Self> {
        separator::validate_separator(separator)?;

        let separator = separator.map(|c| c as u8);

        let mut printable = [false; 256];
        for byte in 0u8..=255 {
            printable[byte as usize] = byte.is_ascii_alphanumeric() || byte.is_ascii_punctuation();
        }

        // The separator is escaped although not strictly required, so the
        // encoded stream stays safe for naive split()-style consumers.
        printable[ESCAPE as usize] = false;
        if let Some(sep) = separator {
            printable[sep as usize] = false;
        }

        Ok(Self {
            separator,
            printable,
        })
    }

    /// The configured separator, if any
    pub fn separator(&self) -> Option<u8> {
        self.separator
    }

    /// Canonical token for a byte: the literal character if printable under
    /// this codec's separator, otherwise the escape sequence `\xHH`
    pub fn canonicalize(&self, byte: u8) -> String {
        if self.printable[byte as usize] {
            (byte as char).to_string()
        } else {
            format!("{}x{:02x}", ESCAPE as char, byte)
        }
    }

    pub(crate) fn require_separator(&self) -> Result<u8> {
        self.separator
            .ok_or_else(|| SrleError::Config("explicit separator required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_is_total() {
        let codec = Srle::new(Some('|')).unwrap();
        for byte in 0u8..=255 {
            let token = codec.canonicalize(byte);
            assert!(!token.is_empty());
            assert!(token.len() == 1 || token.len() == 4, "byte {byte:#04x}");
        }
    }

    #[test]
    fn canonicalize_escapes_separator_and_escape_byte() {
        let codec = Srle::new(Some('|')).unwrap();
        assert_eq!(codec.canonicalize(b'|'), "\\x7c");
        assert_eq!(codec.canonicalize(b'\\'), "\\x5c");
        assert_eq!(codec.canonicalize(b'a'), "a");
        assert_eq!(codec.canonicalize(b'\n'), "\\x0a");
        assert_eq!(codec.canonicalize(0xff), "\\xff");
    }

    #[test]
    fn canonicalize_depends_on_separator() {
        let codec = Srle::new(Some('x')).unwrap();
        assert_eq!(codec.canonicalize(b'x'), "\\x78");
        assert_eq!(codec.canonicalize(b'|'), "|");
    }

    #[test]
    fn auto_codec_leaves_all_printables_literal() {
        let codec = Srle::new(None).unwrap();
        assert_eq!(codec.canonicalize(b'|'), "|");
        assert_eq!(codec.canonicalize(b'\\'), "\\x5c");
    }
}
