pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;
pub mod psd;

use crate::types::{ImageFormat, PREFIX_LEN};

/// Classifies a stream by its leading signature. The first matching rule wins.
pub fn classify(prefix: &[u8; PREFIX_LEN]) -> ImageFormat {
    if gif::has_signature(prefix) {
        ImageFormat::Gif
    } else if jpeg::has_signature(prefix) {
        ImageFormat::Jpg
    } else if png::has_signature(prefix) {
        ImageFormat::Png
    } else if bmp::has_signature(prefix) {
        ImageFormat::Bmp
    } else if psd::has_signature(prefix) {
        ImageFormat::Psd
    } else {
        ImageFormat::Unknown
    }
}

#[inline]
pub(crate) fn field<const N: usize>(prefix: &[u8; PREFIX_LEN], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&prefix[offset..offset + N]);
    out
}
