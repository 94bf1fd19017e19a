//! Scan options

use serde::{Deserialize, Serialize};

/// How the BMP width/height fields are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmpDimensions {
    /// Low 16 bits of each field, as older readers did
    #[default]
    Legacy16,
    /// The full signed 32-bit fields (16-bit for OS/2 core headers)
    Full,
}

/// What to report when a JPEG reaches start of scan without a frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFramePolicy {
    /// Success with zero dimensions
    #[default]
    Quiet,
    /// Fail with `ScanError::NoFrameMarker`
    Error,
}

/// Options for a single scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub bmp_dimensions: BmpDimensions,
    pub missing_frame: MissingFramePolicy,
    /// Check the IHDR chunk length and CRC (reads 3 bytes past the prefix)
    pub verify_png_crc: bool,
    /// Upper bound on buffered JPEG header bytes before a frame is found.
    /// Never below `PREFIX_LEN`, since the prefix is always read.
    pub max_jpeg_header_bytes: u64,
}

pub const DEFAULT_MAX_JPEG_HEADER_BYTES: u64 = 16 * 1024 * 1024;

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            bmp_dimensions: BmpDimensions::Legacy16,
            missing_frame: MissingFramePolicy::Quiet,
            verify_png_crc: false,
            max_jpeg_header_bytes: DEFAULT_MAX_JPEG_HEADER_BYTES,
        }
    }
}

impl ScanOptions {
    /// Full BMP fields, missing JPEG frames are errors, PNG CRC is checked
    pub fn strict() -> Self {
        Self {
            bmp_dimensions: BmpDimensions::Full,
            missing_frame: MissingFramePolicy::Error,
            verify_png_crc: true,
            ..Default::default()
        }
    }

    /// Sets how BMP width/height fields are read
    pub fn with_bmp_dimensions(mut self, mode: BmpDimensions) -> Self {
        self.bmp_dimensions = mode;
        self
    }

    /// Sets the result for a JPEG without a frame header
    pub fn with_missing_frame(mut self, policy: MissingFramePolicy) -> Self {
        self.missing_frame = policy;
        self
    }

    /// Enables or disables the PNG IHDR CRC check
    pub fn with_png_crc(mut self, verify: bool) -> Self {
        self.verify_png_crc = verify;
        self
    }

    /// Sets the JPEG header buffering limit
    pub fn with_max_jpeg_header_bytes(mut self, limit: u64) -> Self {
        self.max_jpeg_header_bytes = limit;
        self
    }
}
