use super::field;
use crate::types::PREFIX_LEN;

pub const GIF87A_SIGNATURE: [u8; 6] = *b"GIF87a";
pub const GIF89A_SIGNATURE: [u8; 6] = *b"GIF89a";

const WIDTH_OFFSET: usize = 6;
const HEIGHT_OFFSET: usize = 8;

#[inline]
pub fn has_signature(data: &[u8]) -> bool {
    data.starts_with(&GIF87A_SIGNATURE) || data.starts_with(&GIF89A_SIGNATURE)
}

/// Logical screen width and height, both little-endian u16.
pub fn dimensions(prefix: &[u8; PREFIX_LEN]) -> (u32, u32) {
    let width = u16::from_le_bytes(field(prefix, WIDTH_OFFSET));
    let height = u16::from_le_bytes(field(prefix, HEIGHT_OFFSET));
    (width.into(), height.into())
}
