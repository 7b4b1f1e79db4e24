//! Fuzzing target for the drill file parser
//!
//! ```bash
//! mkdir -p corpus/fuzz_parser && cp ../tests/fixtures/*.drl corpus/fuzz_parser
//! cargo fuzz run fuzz_parser -O -- -only_ascii=1
//! ```

#![no_main]

use excellon2gcode::parse::parse_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(drill) = std::str::from_utf8(data) else {
        return;
    };
    let points = parse_str(drill);
    assert!(points.len() <= drill.split(['\n', '\r']).count());
});
