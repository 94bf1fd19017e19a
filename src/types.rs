use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Number of leading bytes read before classification.
pub const PREFIX_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Gif,
    Jpg,
    Png,
    Bmp,
    Psd,
    #[default]
    Unknown,
}

impl ImageFormat {
    /// Same as [`crate::formats::classify`].
    pub fn from_prefix(prefix: &[u8; PREFIX_LEN]) -> Self {
        crate::formats::classify(prefix)
    }

    /// Returns the conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Psd => "psd",
            ImageFormat::Unknown => "bin",
        }
    }

    /// Returns a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "GIF Image",
            ImageFormat::Jpg => "JPEG Image",
            ImageFormat::Png => "PNG Image",
            ImageFormat::Bmp => "BMP Image",
            ImageFormat::Psd => "Photoshop Document",
            ImageFormat::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of one scan.
///
/// Exactly one of these holds:
/// - `error` is `None` and `format` is known: `width`/`height` are the header values
/// - `error` is `Some`: `width` and `height` are zero
/// - `format` is `Unknown` with no error: the signature was not recognised
#[derive(Debug, Default)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub error: Option<ScanError>,
}

impl ImageInfo {
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub(crate) fn with_dimensions(format: ImageFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
            error: None,
        }
    }

    pub(crate) fn failed(format: ImageFormat, error: ScanError) -> Self {
        Self {
            format,
            width: 0,
            height: 0,
            error: Some(error),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Width and height, only for a recognised format that scanned cleanly.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        (self.is_ok() && self.format.is_known()).then_some((self.width, self.height))
    }

    /// Moves the error out, for callers that prefer `?` over inspecting the field.
    pub fn into_result(mut self) -> Result<Self, ScanError> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
