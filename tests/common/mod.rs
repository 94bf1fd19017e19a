#![allow(dead_code)]

use std::io::{self, Read};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Hands out at most `chunk` bytes per read call.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self {
            data,
            chunk: chunk.max(1),
        }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Serves `data`, then fails every read after it.
pub struct FailingReader<'a> {
    data: &'a [u8],
}

impl<'a> FailingReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "source closed"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

pub fn pad_to(mut data: Vec<u8>, len: usize) -> Vec<u8> {
    if data.len() < len {
        data.resize(len, 0);
    }
    data
}

pub fn gif(width: u16, height: u16) -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    pad_to(data, 32)
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&(ihdr.len() as u32).to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&ihdr);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(b"IHDR");
    hasher.update(&ihdr);
    data.extend_from_slice(&hasher.finalize().to_be_bytes());
    data
}

pub fn bmp(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    pad_to(data, 54)
}

pub fn psd(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"8BPS".to_vec();
    data.extend_from_slice(&[0x00, 0x01]);
    data.extend_from_slice(&[0u8; 6]);
    data.extend_from_slice(&3u16.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&8u16.to_be_bytes());
    data.extend_from_slice(&3u16.to_be_bytes());
    // empty color mode and image resource sections
    pad_to(data, 34)
}

pub fn jpeg_segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut seg = vec![0xFF, marker];
    seg.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    seg.extend_from_slice(payload);
    seg
}

pub fn jpeg_sof(marker: u8, width: u16, height: u16) -> Vec<u8> {
    let mut payload = vec![0x08];
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    jpeg_segment(marker, &payload)
}

pub fn jfif_app0() -> Vec<u8> {
    jpeg_segment(0xE0, b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00")
}

/// SOI, APP0, COM, DQT, then a frame header, scan header and some scan bytes.
pub fn jpeg(sof_marker: u8, width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend(jfif_app0());
    data.extend(jpeg_segment(0xFE, b"created by a test"));
    data.extend(jpeg_segment(0xDB, &[0x00; 65]));
    data.extend(jpeg_sof(sof_marker, width, height));
    data.extend(jpeg_segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
    data.extend_from_slice(&[0xAB; 64]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}
