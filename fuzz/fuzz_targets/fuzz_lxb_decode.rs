#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must be rejected or decoded, never panic
    if let Ok(file) = lxbread::lxb::LxbFile::parse(data) {
        let _ = file.parameters();
        for row in file.rows() {
            let _ = row.to_string();
        }
    }

    let _ = lxbread::validator::validate_lxb_buffer("fuzz", data);
});
