//! Unsigned varint (LEB128) I/O over byte cursors.
//!
//! Every numeric field in a varsig is an unsigned varint. This module adapts
//! [`unsigned_varint`] to [`std::io::Read`] sources and keeps running out of
//! input distinct from other read failures.

use std::io::{self, Read};
use thiserror::Error;
use unsigned_varint::{decode, encode};

/// Failure while reading raw bytes or varints from the input.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input ended before the field was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The bytes do not form a valid (minimal, non-overflowing) varint.
    #[error("malformed varint: {0}")]
    Malformed(#[from] decode::Error),

    /// Any other failure from the underlying reader.
    #[error("read failed: {0}")]
    Io(io::Error),
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ReadError::UnexpectedEof
        } else {
            ReadError::Io(err)
        }
    }
}

/// Read one unsigned varint.
///
/// # Errors
///
/// Returns [`ReadError::UnexpectedEof`] if the input ends mid-varint (or
/// before it starts), and [`ReadError::Malformed`] for overlong encodings.
pub fn read_u64<R: Read + ?Sized>(reader: &mut R) -> Result<u64, ReadError> {
    match unsigned_varint::io::read_u64(reader) {
        Ok(n) => Ok(n),
        Err(unsigned_varint::io::ReadError::Io(err)) => Err(err.into()),
        Err(unsigned_varint::io::ReadError::Decode(err)) => Err(ReadError::Malformed(err)),
        Err(err) => Err(ReadError::Io(io::Error::other(err))),
    }
}

/// Append one unsigned varint to `buf`.
pub fn write_u64(buf: &mut Vec<u8>, n: u64) {
    let mut scratch = encode::u64_buffer();
    buf.extend_from_slice(encode::u64(n, &mut scratch));
}

/// Check whether at least one more byte can be read.
///
/// The byte read is consumed.
pub(crate) fn has_remaining<R: Read + ?Sized>(reader: &mut R) -> Result<bool, ReadError> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(n) => return Ok(n > 0),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}

/// Drain the rest of the input.
pub(crate) fn read_remaining<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, ReadError> {
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest)?;
    Ok(rest)
}
