//! Read helpers for sources that may return short reads.
//!
//! A single `Read::read` call is allowed to return fewer bytes than asked for,
//! so every fixed-size read in the crate goes through [`read_full`], which keeps
//! reading until the span is filled or the source reports end of stream.

use std::io::{self, ErrorKind, Read};

use crate::error::{Result, ScanError};
use crate::types::PREFIX_LEN;

/// Reads into `buffer` until it is full or the source is exhausted.
///
/// Returns the number of bytes filled. `Interrupted` errors are retried,
/// any other error is returned as-is.
pub fn read_full<R: Read + ?Sized>(source: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buffer.len() {
        match source.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Reads the classification prefix. A source that ends early is `TooSmall`.
pub fn read_prefix<R: Read + ?Sized>(source: &mut R) -> Result<[u8; PREFIX_LEN]> {
    let mut prefix = [0u8; PREFIX_LEN];
    let filled = read_full(source, &mut prefix)?;

    if filled < PREFIX_LEN {
        return Err(ScanError::TooSmall);
    }

    Ok(prefix)
}

/// Grows `buffer` with bytes from `source` until it holds at least `end` bytes.
///
/// On exhaustion the buffer keeps only the bytes actually read and the call
/// fails with `UnexpectedEof`.
pub fn fill_to<R: Read + ?Sized>(source: &mut R, buffer: &mut Vec<u8>, end: usize) -> Result<()> {
    let start = buffer.len();
    if start >= end {
        return Ok(());
    }

    buffer.resize(end, 0);
    let filled = match read_full(source, &mut buffer[start..]) {
        Ok(n) => start + n,
        Err(e) => {
            buffer.truncate(start);
            return Err(e.into());
        }
    };

    if filled < end {
        buffer.truncate(filled);
        return Err(ScanError::UnexpectedEof {
            expected: end,
            actual: filled,
        });
    }

    Ok(())
}
