#![no_main]

use imgdims::{ScanOptions, scan, scan_with_options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let info = scan(data);
    if info.error.is_some() {
        assert_eq!((info.width, info.height), (0, 0));
    }

    let strict = ScanOptions::strict();
    let _ = scan_with_options(data, &strict);
});
