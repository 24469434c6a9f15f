//! Streaming encoder
//!
//! Single pass over the input: track the current run and flush a
//! `<separator><token><count>` tuple each time the byte changes. End of
//! stream is handled as a sentinel read that never equals a real byte, so
//! the final run is flushed by the same comparison as every other run.

use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};

use tracing::trace;

use crate::error::Result;
use super::Srle;

impl Srle {
    /// Encode `reader` into `writer` as SRLE tuples
    ///
    /// Requires an explicit separator; a codec built with `None` returns a
    /// configuration error. Empty input produces empty output.
    pub fn encode<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<()> {
        let separator = self.require_separator()?;

        let mut reader = BufReader::new(reader);
        let mut writer = BufWriter::new(writer);

        let mut current: Option<u8> = None;
        let mut run: u64 = 0;

        loop {
            let next = read_byte(&mut reader)?;

            if next != current {
                if let Some(byte) = current {
                    trace!(byte, run, "flush run");
                    writer.write_all(&[separator])?;
                    writer.write_all(self.canonicalize(byte).as_bytes())?;
                    write!(writer, "{run}")?;
                }
                current = next;
                run = 1;
            } else {
                run += 1;
            }

            if next.is_none() {
                break;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

fn read_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(Some(buf[0])),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}
