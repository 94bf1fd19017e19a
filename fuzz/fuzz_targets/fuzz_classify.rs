#![no_main]

use imgdims::formats::classify;
use imgdims::types::PREFIX_LEN;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(prefix) = data.first_chunk::<PREFIX_LEN>() {
        let _ = classify(prefix);
    }
});
