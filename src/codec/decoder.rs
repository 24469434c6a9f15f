//! Streaming decoder
//!
//! A hand-rolled state machine over `<separator><token><count>` tuples. Each
//! error carries the byte offset at which it was detected. The byte that
//! terminates a run count belongs to the next tuple and is pushed back into
//! the reader rather than discarded.

use std::io::{self, BufWriter, Read, Write};

use tracing::trace;

use crate::error::{Result, SrleError};
use super::reader::TrackingReader;
use super::separator::is_separator_byte;
use super::{Srle, ESCAPE};

impl Srle {
    /// Decode SRLE tuples from `reader` into `writer`
    ///
    /// With an explicit separator, every tuple must start with it. With
    /// `None`, the first input byte is taken as the separator for this call,
    /// provided it passes the separator class check. Empty input decodes to
    /// empty output either way.
    ///
    /// Decoding is lenient about the token byte: a literal byte equal to the
    /// separator is accepted verbatim, so hand-written input does not need to
    /// escape it.
    pub fn decode<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<()> {
        let mut reader = TrackingReader::new(reader);
        let mut writer = BufWriter::new(writer);

        let first = match reader.read_byte()? {
            Some(byte) => byte,
            None => return Ok(()),
        };

        let separator = match self.separator {
            Some(sep) => sep,
            None => {
                if !is_separator_byte(first) {
                    return Err(SrleError::Separator {
                        message: format!("Unsupported separator 0x{first:02x}"),
                        offset: reader.offset(),
                    });
                }
                trace!(separator = %(first as char), "separator detected");
                first
            }
        };

        reader.unread(first);

        while let Some(byte) = reader.read_byte()? {
            if byte != separator {
                return Err(SrleError::Separator {
                    message: format!("Unexpected byte 0x{byte:02x} as separator"),
                    offset: reader.offset(),
                });
            }

            let value = self.read_token(&mut reader)?;
            let count = read_count(&mut reader)?;
            trace!(value, count, "decoded tuple");

            io::copy(&mut io::repeat(value).take(count), &mut writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Read one canonical token: a literal byte or a `\xHH` escape
    fn read_token<R: Read>(&self, reader: &mut TrackingReader<R>) -> Result<u8> {
        let lead = reader.read_byte()?.ok_or(SrleError::TruncatedInput {
            expected: "character",
            offset: reader.offset(),
        })?;

        if lead != ESCAPE {
            return Ok(lead);
        }

        if reader.read_byte()? != Some(b'x') {
            return Err(SrleError::EscapeFormat {
                message: "Expected 'x' for escape".to_string(),
                offset: reader.offset(),
            });
        }

        let (hi, lo) = match (reader.read_byte()?, reader.read_byte()?) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => {
                return Err(SrleError::EscapeFormat {
                    message: "Expected two digits".to_string(),
                    offset: reader.offset(),
                })
            }
        };

        parse_hex_pair(hi, lo).ok_or_else(|| SrleError::EscapeFormat {
            message: format!(
                "Invalid hex value {:?}",
                [hi as char, lo as char].iter().collect::<String>()
            ),
            offset: reader.offset(),
        })
    }
}

/// Case-insensitive parse of two ASCII hex digits into a byte value
fn parse_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi as u8) << 4 | lo as u8)
}

/// Read the decimal run count and push the terminating byte back
///
/// The count saturates at `u64::MAX`.
fn read_count<R: Read>(reader: &mut TrackingReader<R>) -> Result<u64> {
    let mut count: u64 = 0;
    let mut digits = 0usize;

    loop {
        match reader.read_byte()? {
            Some(digit) if digit.is_ascii_digit() => {
                count = count
                    .saturating_mul(10)
                    .saturating_add(u64::from(digit - b'0'));
                digits += 1;
            }
            Some(other) => {
                reader.unread(other);
                break;
            }
            None => break,
        }
    }

    if digits == 0 {
        return Err(SrleError::MissingCount {
            offset: reader.offset(),
        });
    }

    Ok(count)
}
