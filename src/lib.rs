pub mod error;
pub mod formats;
pub mod io;
pub mod options;
pub mod scan;
pub mod types;

pub use error::{Result, ScanError};
pub use options::{BmpDimensions, MissingFramePolicy, ScanOptions};
pub use scan::{scan, scan_bytes, scan_with_options};
pub use types::{ImageFormat, ImageInfo, PREFIX_LEN};
