//! Tracking reader
//!
//! Wraps the decode input stream with two pieces of state the decoder needs:
//! a running count of bytes consumed (reported in error messages) and a
//! one-byte pushback slot for the lookahead byte that terminates a run count
//! but belongs to the next tuple.

use std::io::{BufReader, ErrorKind, Read};

use crate::error::Result;

pub(crate) struct TrackingReader<R> {
    inner: BufReader<R>,
    offset: u64,
    pushback: Option<u8>,
}

impl<R: Read> TrackingReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            offset: 0,
            pushback: None,
        }
    }

    /// Bytes consumed from the underlying stream so far
    ///
    /// A pushed-back byte is counted once, when it was first read.
    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    /// Read one byte, `None` at end of stream
    pub(crate) fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }

        let mut buf = [0u8; 1];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.offset += 1;
                Ok(Some(buf[0]))
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Re-inject a byte so the next `read_byte` returns it again
    pub(crate) fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bytes_and_tracks_offset() {
        let mut reader = TrackingReader::new(&b"abc"[..]);
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        assert_eq!(reader.offset(), 2);
        assert_eq!(reader.read_byte().unwrap(), Some(b'c'));
        assert_eq!(reader.read_byte().unwrap(), None);
        assert_eq!(reader.offset(), 3);
    }

    #[test]
    fn pushback_is_returned_without_recounting() {
        let mut reader = TrackingReader::new(&b"ab"[..]);
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        reader.unread(b'a');
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    fn eof_reads_are_repeatable() {
        let mut reader = TrackingReader::new(&b""[..]);
        assert_eq!(reader.read_byte().unwrap(), None);
        assert_eq!(reader.read_byte().unwrap(), None);
        assert_eq!(reader.offset(), 0);
    }
}
