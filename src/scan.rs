use std::io::Read;

use tracing::debug;

use crate::formats::{bmp, classify, gif, jpeg, png, psd};
use crate::io::read_prefix;
use crate::options::ScanOptions;
use crate::types::{ImageFormat, ImageInfo};

/// Identifies the format of `source` and reads its dimensions with default options.
///
/// Only header bytes are consumed. Failures are reported through
/// [`ImageInfo::error`] and never returned or raised.
pub fn scan<R: Read>(source: R) -> ImageInfo {
    scan_with_options(source, &ScanOptions::default())
}

/// Scans an in-memory buffer with default options.
pub fn scan_bytes(data: &[u8]) -> ImageInfo {
    scan(data)
}

/// Same as [`scan`], with explicit options.
pub fn scan_with_options<R: Read>(mut source: R, options: &ScanOptions) -> ImageInfo {
    let prefix = match read_prefix(&mut source) {
        Ok(prefix) => prefix,
        Err(err) => {
            debug!(error = %err, "could not read header prefix");
            return ImageInfo::failed(ImageFormat::Unknown, err);
        }
    };

    let format = classify(&prefix);
    debug!(%format, "classified stream");

    let result = match format {
        ImageFormat::Gif => Ok(gif::dimensions(&prefix)),
        ImageFormat::Jpg => jpeg::dimensions(&mut source, &prefix, options),
        ImageFormat::Png => {
            let dimensions = png::dimensions(&prefix);
            if options.verify_png_crc && dimensions.is_ok() {
                png::verify_ihdr(&prefix, &mut source).and(dimensions)
            } else {
                dimensions
            }
        }
        ImageFormat::Bmp => bmp::dimensions(&prefix, options.bmp_dimensions),
        ImageFormat::Psd => psd::dimensions(&prefix),
        ImageFormat::Unknown => return ImageInfo::new(ImageFormat::Unknown),
    };

    match result {
        Ok((width, height)) => {
            debug!(%format, width, height, "dimensions extracted");
            ImageInfo::with_dimensions(format, width, height)
        }
        Err(err) => {
            debug!(%format, error = %err, "dimension extraction failed");
            ImageInfo::failed(format, err)
        }
    }
}
