use std::io::Read;

use super::field;
use crate::error::{Result, ScanError};
use crate::io::fill_to;
use crate::types::PREFIX_LEN;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

const IHDR_LENGTH_OFFSET: usize = 8;
const IHDR_TYPE_OFFSET: usize = 12;
const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;
const IHDR_DATA_LENGTH: u32 = 13;
/// Chunk type and data, the span covered by the IHDR CRC
const IHDR_CRC_START: usize = IHDR_TYPE_OFFSET;
const IHDR_CRC_OFFSET: usize = 29;
pub const IHDR_END: usize = 33;

#[inline]
pub fn has_signature(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Width and height from the IHDR chunk, which must directly follow the signature.
pub fn dimensions(prefix: &[u8; PREFIX_LEN]) -> Result<(u32, u32)> {
    if &field::<4>(prefix, IHDR_TYPE_OFFSET) != IHDR_CHUNK_TYPE {
        return Err(ScanError::InvalidPngFormat);
    }

    let width = i32::from_be_bytes(field(prefix, WIDTH_OFFSET));
    let height = i32::from_be_bytes(field(prefix, HEIGHT_OFFSET));

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(ScanError::InvalidPngFormat),
    }
}

/// Reads the rest of the IHDR chunk and checks its declared length and CRC.
pub fn verify_ihdr<R: Read + ?Sized>(prefix: &[u8; PREFIX_LEN], source: &mut R) -> Result<()> {
    let mut header = Vec::with_capacity(IHDR_END);
    header.extend_from_slice(prefix);
    fill_to(source, &mut header, IHDR_END)?;

    let length = u32::from_be_bytes(field(prefix, IHDR_LENGTH_OFFSET));
    if length != IHDR_DATA_LENGTH {
        return Err(ScanError::InvalidPngFormat);
    }

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&header[IHDR_CRC_START..IHDR_CRC_OFFSET]);
    let calculated = hasher.finalize();
    let stored = u32::from_be_bytes([
        header[IHDR_CRC_OFFSET],
        header[IHDR_CRC_OFFSET + 1],
        header[IHDR_CRC_OFFSET + 2],
        header[IHDR_CRC_OFFSET + 3],
    ]);

    if calculated != stored {
        tracing::debug!(calculated, stored, "IHDR CRC mismatch");
        return Err(ScanError::InvalidPngFormat);
    }

    Ok(())
}
