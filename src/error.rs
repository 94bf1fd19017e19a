use std::io;
use thiserror::Error;

/// Reasons a single scan can fail. The `Display` text is the error string
/// reported in [`ImageInfo::error`](crate::ImageInfo).
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Too small")]
    TooSmall,

    #[error("Invalid BMP format")]
    InvalidBmpFormat,

    #[error("Invalid PNG format")]
    InvalidPngFormat,

    #[error("Invalid PSD format")]
    InvalidPsdFormat,

    #[error("Invalid JPG format")]
    InvalidJpgFormat,

    #[error("No frame marker found before start of scan")]
    NoFrameMarker,

    #[error("Unexpected end of stream: expected {expected} bytes, got {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    #[error("Header exceeds {limit} bytes without a frame marker")]
    HeaderTooLarge { limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
