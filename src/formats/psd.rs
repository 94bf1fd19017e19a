use super::field;
use crate::error::{Result, ScanError};
use crate::types::PREFIX_LEN;

pub const PSD_SIGNATURE: [u8; 4] = *b"8BPS";
pub const PSD_VERSION: [u8; 2] = [0x00, 0x01];

const VERSION_OFFSET: usize = 4;
const HEIGHT_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;

#[inline]
pub fn has_signature(data: &[u8]) -> bool {
    data.starts_with(&PSD_SIGNATURE)
}

/// Height precedes width in the PSD header; both are big-endian i32.
pub fn dimensions(prefix: &[u8; PREFIX_LEN]) -> Result<(u32, u32)> {
    if field::<2>(prefix, VERSION_OFFSET) != PSD_VERSION {
        return Err(ScanError::InvalidPsdFormat);
    }

    let height = i32::from_be_bytes(field(prefix, HEIGHT_OFFSET));
    let width = i32::from_be_bytes(field(prefix, WIDTH_OFFSET));

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(ScanError::InvalidPsdFormat),
    }
}
