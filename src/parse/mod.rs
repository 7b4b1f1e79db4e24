//! Excellon drill file parsing.
//!
//! Only the subset needed to recover hole positions is understood:
//! comments, `%` section markers, the `M48` header and coordinate lines.
//! Anything else is skipped without complaint.

use std::fmt;
use std::io::{self, BufRead};

use tracing::trace;

mod parser;
pub use parser::excellon::{number, x_line, xy_line, y_line};

/// Value an axis has before any coordinate line sets it.
pub const INITIAL_COORDINATE: &str = "0.0";

/// Absolute position of a single hole.
///
/// Both coordinates are the literal text of the drill file
/// and are never converted to a binary number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrillPoint {
    pub x: String,
    pub y: String,
}

impl DrillPoint {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for DrillPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The last X and Y given by the drill file.
///
/// Excellon lets a coordinate line omit an axis that hasn't changed,
/// so these are read whenever a line names only one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarryState {
    x: String,
    y: String,
}

impl Default for CarryState {
    fn default() -> Self {
        Self {
            x: INITIAL_COORDINATE.to_string(),
            y: INITIAL_COORDINATE.to_string(),
        }
    }
}

impl CarryState {
    pub fn x(&self) -> &str {
        &self.x
    }

    pub fn y(&self) -> &str {
        &self.y
    }

    /// Interpret one line of a drill file, pushing any holes it names onto `points`.
    ///
    /// The line must not include its terminator.
    pub fn feed(&mut self, line: &str, points: &mut Vec<DrillPoint>) {
        if line.starts_with(';') || line.starts_with('%') || line.starts_with("M48") {
            trace!(line, "skipping non-coordinate line");
            return;
        }

        if let Ok((x, y)) = xy_line(line) {
            points.push(DrillPoint::new(x, y));
            self.x = x.to_string();
            self.y = y.to_string();
            return;
        }

        let mut matched = false;

        if let Ok(x) = x_line(line) {
            points.push(DrillPoint::new(x, self.y.as_str()));
            self.x = x.to_string();
            matched = true;
        }

        // Checked independently of the X-only form, not as an else-branch.
        if let Ok(y) = y_line(line) {
            points.push(DrillPoint::new(self.x.as_str(), y));
            self.y = y.to_string();
            matched = true;
        }

        if !matched {
            trace!(line, "ignoring unrecognized line");
        }
    }
}

/// Collect the drill points of a sequence of lines, in order.
pub fn parse_lines<I>(lines: I) -> Vec<DrillPoint>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut state = CarryState::default();
    let mut points = vec![];
    for line in lines {
        state.feed(line.as_ref(), &mut points);
    }
    points
}

/// Split a `\n`-delimited chunk on the remaining line terminators.
///
/// A `\r` directly before the `\n` belongs to a `\r\n` pair; any other
/// `\r` ends a line on its own.
fn split_carriage_returns(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.strip_suffix('\r').unwrap_or(chunk).split('\r')
}

/// Collect the drill points of a drill file held in memory.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
pub fn parse_str(input: &str) -> Vec<DrillPoint> {
    parse_lines(input.split('\n').flat_map(split_carriage_returns))
}

/// Collect the drill points of a drill file read line by line from `reader`.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
/// Fails only on I/O errors, including input that isn't valid UTF-8.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Vec<DrillPoint>> {
    let mut state = CarryState::default();
    let mut points = vec![];
    for chunk in reader.split(b'\n') {
        let chunk = String::from_utf8(chunk?)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        for line in split_carriage_returns(&chunk) {
            state.feed(line, &mut points);
        }
    }
    Ok(points)
}
