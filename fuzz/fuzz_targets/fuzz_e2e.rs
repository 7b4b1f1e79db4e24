//! Fuzzing target that checks the shape of every emitted drilling program
//!
//! ```bash
//! mkdir -p corpus/fuzz_e2e && cp ../tests/fixtures/*.drl corpus/fuzz_e2e
//! cargo fuzz run fuzz_e2e -O -- -only_ascii=1
//! ```

#![no_main]

use excellon2gcode::{convert, ToolConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let Ok(count) = convert(data, &mut out, &ToolConfig::default()) else {
        return;
    };
    let program = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = program.lines().collect();

    assert_eq!(lines.len(), 4 + 3 * count);
    assert_eq!(&lines[..4], ["g90", "g0 f100", "g1 f10", "g0 z 0.125"]);
    for hole in lines[4..].chunks(3) {
        assert!(hole[0].starts_with("g0 x "));
        assert_eq!(&hole[1..], ["g1 z -0.125", "g1 z 0.125"]);
    }
});
