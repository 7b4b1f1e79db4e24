pub mod command;
mod drill;
mod format;
mod token;

pub use command::Command;
pub use drill::{drill_program, LINEAR_FEED_RATE, RAPID_FEED_RATE};
pub use format::{format_gcode_fmt, format_gcode_io};
pub use token::{Field, Value};
