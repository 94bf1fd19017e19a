use super::field;
use crate::error::{Result, ScanError};
use crate::options::BmpDimensions;
use crate::types::PREFIX_LEN;

pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

const DIB_HEADER_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
/// OS/2 BITMAPCOREHEADER keeps u16 fields back to back
const CORE_HEADER_SIZE: u32 = 12;
const CORE_HEIGHT_OFFSET: usize = 20;

#[inline]
pub fn has_signature(data: &[u8]) -> bool {
    data.starts_with(&BMP_SIGNATURE)
}

pub fn dimensions(prefix: &[u8; PREFIX_LEN], mode: BmpDimensions) -> Result<(u32, u32)> {
    match mode {
        BmpDimensions::Legacy16 => Ok(legacy_dimensions(prefix)),
        BmpDimensions::Full => full_dimensions(prefix),
    }
}

/// Reads only the low 16 bits of the width and height fields.
fn legacy_dimensions(prefix: &[u8; PREFIX_LEN]) -> (u32, u32) {
    let width = u16::from_le_bytes(field(prefix, WIDTH_OFFSET));
    let height = u16::from_le_bytes(field(prefix, HEIGHT_OFFSET));
    (width.into(), height.into())
}

fn full_dimensions(prefix: &[u8; PREFIX_LEN]) -> Result<(u32, u32)> {
    let header_size = u32::from_le_bytes(field(prefix, DIB_HEADER_SIZE_OFFSET));

    if header_size == CORE_HEADER_SIZE {
        let width = u16::from_le_bytes(field(prefix, WIDTH_OFFSET));
        let height = u16::from_le_bytes(field(prefix, CORE_HEIGHT_OFFSET));
        return Ok((width.into(), height.into()));
    }

    let width = i32::from_le_bytes(field(prefix, WIDTH_OFFSET));
    let height = i32::from_le_bytes(field(prefix, HEIGHT_OFFSET));

    // negative height marks a top-down bitmap
    if width <= 0 || height == 0 {
        return Err(ScanError::InvalidBmpFormat);
    }

    Ok((width.unsigned_abs(), height.unsigned_abs()))
}
