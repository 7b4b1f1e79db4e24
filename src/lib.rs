//! Convert Excellon drill files into g-code drilling programs.
//!
//! A run has two phases. [parse] reads the drill file line by line and
//! collects [parse::DrillPoint]s, carrying the last seen X and Y forward
//! when a line omits an axis. [emit] then renders those points into a
//! program that rapids to each hole, plunges to the drill depth and
//! retracts to the safe height.
//!
//! Coordinates are kept as the exact text found in the drill file, so
//! `X3.25` is written back out as `x 3.25`.
//!
//! ```
//! use excellon2gcode::{convert, ToolConfig};
//!
//! let drill = "M48\nX100Y200\nY300\n%\n";
//! let mut out = Vec::new();
//! let count = convert(drill.as_bytes(), &mut out, &ToolConfig::default()).unwrap();
//! assert_eq!(count, 2);
//! assert!(String::from_utf8(out).unwrap().contains("g0 x 100 y 300"));
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

pub mod config;
pub mod emit;
pub mod parse;

pub use config::ToolConfig;
pub use parse::DrillPoint;

/// Parse an entire drill file from `input` and write the drilling program to `output`.
///
/// Returns the number of drill points emitted.
/// Any I/O error on either side is returned as-is and ends the run.
pub fn convert<R, W>(input: R, output: W, config: &ToolConfig) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let points = parse::parse_reader(input)?;
    debug!(points = points.len(), "parsed drill file");

    let program = emit::drill_program(&points, config);
    emit::format_gcode_io(&program, output)?;
    debug!(
        commands = program.len(),
        height = %config.height,
        depth = %config.depth,
        "emitted drilling program"
    );

    Ok(points.len())
}
