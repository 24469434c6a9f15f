//! Separator validation
//!
//! A separator must be a single ASCII letter or punctuation byte. Digits are
//! excluded because they would be indistinguishable from a run count;
//! whitespace and non-ASCII bytes are excluded outright. The escape byte `\`
//! is punctuation and therefore passes validation (see DESIGN.md).

use crate::error::{Result, SrleError};

/// Validate a separator choice
///
/// `None` is always valid and selects decode-time auto-detection.
pub fn validate_separator(separator: Option<char>) -> Result<()> {
    let Some(sep) = separator else {
        return Ok(());
    };

    if !sep.is_ascii() {
        return Err(SrleError::Config(format!(
            "separator {sep:?} must be an ASCII character"
        )));
    }

    if !is_separator_byte(sep as u8) {
        return Err(SrleError::Config(format!(
            "separator {sep:?} must be a letter or punctuation, not a digit or whitespace"
        )));
    }

    Ok(())
}

/// Byte-level separator class check, shared with decoder auto-detection
pub(crate) fn is_separator_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_valid() {
        assert!(validate_separator(None).is_ok());
    }

    #[test]
    fn letters_and_punctuation_are_valid() {
        for sep in ['|', 'x', 'a', 'Z', '&', '.', ',', '!'] {
            assert!(validate_separator(Some(sep)).is_ok(), "separator {sep:?}");
        }
    }

    #[test]
    fn escape_char_is_technically_valid() {
        // Permissive rule kept on purpose: '\\' is punctuation and passes,
        // even though it collides with the escape marker.
        assert!(validate_separator(Some('\\')).is_ok());
    }

    #[test]
    fn digits_are_rejected() {
        for sep in '0'..='9' {
            assert!(matches!(
                validate_separator(Some(sep)),
                Err(SrleError::Config(_))
            ));
        }
    }

    #[test]
    fn whitespace_is_rejected() {
        for sep in [' ', '\t', '\n', '\r', '\x0b', '\x0c'] {
            assert!(matches!(
                validate_separator(Some(sep)),
                Err(SrleError::Config(_))
            ));
        }
    }

    #[test]
    fn non_ascii_is_rejected() {
        for sep in ['\u{ff}', 'é', '✗'] {
            assert!(matches!(
                validate_separator(Some(sep)),
                Err(SrleError::Config(_))
            ));
        }
    }

    #[test]
    fn validation_is_deterministic() {
        for _ in 0..3 {
            assert!(validate_separator(Some('|')).is_ok());
            assert!(validate_separator(Some('5')).is_err());
        }
    }
}
