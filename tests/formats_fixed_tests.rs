mod common;

use common::{bmp, gif, pad_to, psd};
use imgdims::{BmpDimensions, ImageFormat, ScanError, ScanOptions, scan, scan_with_options};

#[test]
fn test_gif89a_100_by_50() {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&[0x64, 0x00]);
    data.extend_from_slice(&[0x32, 0x00]);
    data = pad_to(data, 30);

    let info = scan(data.as_slice());
    assert_eq!(info.format, ImageFormat::Gif);
    assert!(info.error.is_none());
    assert_eq!((info.width, info.height), (100, 50));
}

#[test]
fn test_gif87a() {
    let mut data = gif(1, 65_535);
    data[..6].copy_from_slice(b"GIF87a");
    let info = scan(data.as_slice());
    assert_eq!(info.format, ImageFormat::Gif);
    assert_eq!(info.dimensions(), Some((1, 65_535)));
}

#[test]
fn test_bmp_legacy_read() {
    let info = scan(bmp(1024, 768).as_slice());
    assert_eq!(info.format, ImageFormat::Bmp);
    assert_eq!(info.dimensions(), Some((1024, 768)));
}

#[test]
fn test_bmp_legacy_keeps_low_16_bits() {
    let info = scan(bmp(100_000, -200).as_slice());
    assert_eq!(info.dimensions(), Some((100_000 - 65_536, 65_536 - 200)));
}

#[test]
fn test_bmp_full_mode() {
    let options = ScanOptions::default().with_bmp_dimensions(BmpDimensions::Full);

    let info = scan_with_options(bmp(100_000, -200).as_slice(), &options);
    assert_eq!(info.dimensions(), Some((100_000, 200)));

    let info = scan_with_options(bmp(0, 10).as_slice(), &options);
    assert!(matches!(info.error, Some(ScanError::InvalidBmpFormat)));
}

#[test]
fn test_psd_dimensions() {
    let info = scan(psd(3000, 2000).as_slice());
    assert_eq!(info.format, ImageFormat::Psd);
    assert_eq!(info.dimensions(), Some((3000, 2000)));
}

#[test]
fn test_psd_bad_version() {
    let mut data = psd(3000, 2000);
    data[5] = 0x02;

    let info = scan(data.as_slice());
    assert_eq!(info.format, ImageFormat::Psd);
    assert!(matches!(info.error, Some(ScanError::InvalidPsdFormat)));
    assert_eq!(info.error.unwrap().to_string(), "Invalid PSD format");
    assert_eq!((info.width, info.height), (0, 0));
}
