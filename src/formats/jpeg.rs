//! JPEG marker scanning.
//!
//! Unlike the other formats, JPEG keeps its dimensions in a Start-Of-Frame
//! segment that may be preceded by any number of APPn, COM, DQT, DHT and
//! similar segments of arbitrary length. [`MarkerScanner`] walks those
//! segments one by one, pulling bytes from the source only as each segment
//! needs them.

use std::io::Read;

use tracing::{debug, trace};

use crate::error::{Result, ScanError};
use crate::io::fill_to;
use crate::options::{MissingFramePolicy, ScanOptions};
use crate::types::PREFIX_LEN;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

pub const MARKER_PREFIX: u8 = 0xFF;
pub const TEM: u8 = 0x01;
pub const SOF0: u8 = 0xC0;
pub const DHT: u8 = 0xC4;
pub const RST0: u8 = 0xD0;
pub const RST7: u8 = 0xD7;
pub const SOI: u8 = 0xD8;
pub const EOI: u8 = 0xD9;
pub const SOS: u8 = 0xDA;

/// Length field, precision, height and width.
const SOF_MIN_LENGTH: usize = 7;
const LENGTH_FIELD_SIZE: usize = 2;

#[inline]
pub fn has_signature(data: &[u8]) -> bool {
    data.starts_with(&JPEG_SOI)
}

/// Start-Of-Frame markers. `0xC4`, `0xC8` and `0xCC` sit in the same range
/// but are DHT, JPG and DAC.
#[inline]
pub const fn is_sof_marker(marker: u8) -> bool {
    matches!(
        marker,
        0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF
    )
}

#[inline]
pub const fn is_restart_marker(marker: u8) -> bool {
    marker >= RST0 && marker <= RST7
}

/// Markers that carry no length field.
#[inline]
pub const fn is_standalone_marker(marker: u8) -> bool {
    marker == TEM || is_restart_marker(marker)
}

/// Markers after which no frame header can follow.
#[inline]
pub const fn ends_header(marker: u8) -> bool {
    matches!(marker, SOS | EOI | SOI)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Frame { marker: u8, width: u16, height: u16 },
    NoFrame { marker: u8 },
}

/// Walks JPEG marker segments over a growing buffer.
///
/// The buffer starts as the classification prefix and always mirrors the
/// stream from offset 0, so `pos` is both a buffer index and a stream offset.
pub struct MarkerScanner<R> {
    source: R,
    buffer: Vec<u8>,
    pos: usize,
    limit: u64,
}

impl<R: Read> MarkerScanner<R> {
    pub fn new(source: R, prefix: &[u8; PREFIX_LEN]) -> Self {
        Self {
            source,
            buffer: prefix.to_vec(),
            pos: JPEG_SOI.len(),
            limit: u64::MAX,
        }
    }

    /// Caps the buffered stream length. The prefix is already buffered, so the
    /// cap never drops below `PREFIX_LEN`.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(PREFIX_LEN as u64);
        self
    }

    #[inline]
    pub fn bytes_buffered(&self) -> usize {
        self.buffer.len()
    }

    fn ensure(&mut self, end: usize) -> Result<()> {
        if end as u64 > self.limit {
            return Err(ScanError::HeaderTooLarge { limit: self.limit });
        }
        fill_to(&mut self.source, &mut self.buffer, end)
    }

    /// Scans forward until a frame header or the start of entropy-coded data.
    pub fn find_frame(&mut self) -> Result<ScanOutcome> {
        loop {
            self.ensure(self.pos + 2)?;
            if self.buffer[self.pos] != MARKER_PREFIX {
                debug!(offset = self.pos, "expected marker prefix");
                return Err(ScanError::InvalidJpgFormat);
            }

            // 0xFF fill bytes may pad the gap before a marker code
            let mut code_at = self.pos + 1;
            while self.buffer[code_at] == MARKER_PREFIX {
                code_at += 1;
                self.ensure(code_at + 1)?;
            }
            let marker = self.buffer[code_at];
            self.pos = code_at + 1;

            if is_standalone_marker(marker) {
                trace!(marker, "standalone marker");
                continue;
            }

            if ends_header(marker) {
                return Ok(ScanOutcome::NoFrame { marker });
            }

            self.ensure(self.pos + LENGTH_FIELD_SIZE)?;
            let length =
                u16::from_be_bytes([self.buffer[self.pos], self.buffer[self.pos + 1]]) as usize;
            if length < LENGTH_FIELD_SIZE {
                debug!(marker, length, "segment length shorter than its own field");
                return Err(ScanError::InvalidJpgFormat);
            }

            let segment_end = self.pos + length;
            self.ensure(segment_end)?;

            if is_sof_marker(marker) {
                if length < SOF_MIN_LENGTH {
                    return Err(ScanError::InvalidJpgFormat);
                }
                let body = &self.buffer[self.pos + LENGTH_FIELD_SIZE..segment_end];
                let height = u16::from_be_bytes([body[1], body[2]]);
                let width = u16::from_be_bytes([body[3], body[4]]);
                return Ok(ScanOutcome::Frame {
                    marker,
                    width,
                    height,
                });
            }

            trace!(marker, length, offset = self.pos, "skipping segment");
            self.pos = segment_end;
        }
    }
}

/// Width and height from the first frame header after the SOI marker.
pub fn dimensions<R: Read>(
    source: R,
    prefix: &[u8; PREFIX_LEN],
    options: &ScanOptions,
) -> Result<(u32, u32)> {
    let mut scanner =
        MarkerScanner::new(source, prefix).with_limit(options.max_jpeg_header_bytes);

    match scanner.find_frame()? {
        ScanOutcome::Frame {
            marker,
            width,
            height,
        } => {
            debug!(
                marker,
                width,
                height,
                buffered = scanner.bytes_buffered(),
                "frame header found"
            );
            Ok((width.into(), height.into()))
        }
        ScanOutcome::NoFrame { marker } => match options.missing_frame {
            MissingFramePolicy::Quiet => {
                debug!(marker, "no frame header before end of header");
                Ok((0, 0))
            }
            MissingFramePolicy::Error => Err(ScanError::NoFrameMarker),
        },
    }
}
