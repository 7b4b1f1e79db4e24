use rust_decimal::Decimal;

use super::command::{absolute_distance_mode, linear_interpolation, rapid_positioning, Command};
use super::Field;
use crate::config::ToolConfig;
use crate::parse::DrillPoint;

/// Feed rate set for `g0` moves at the start of every program
pub const RAPID_FEED_RATE: usize = 100;
/// Feed rate set for `g1` moves at the start of every program
pub const LINEAR_FEED_RATE: usize = 10;

fn z(value: Decimal) -> Field<'static> {
    Field::new("z", value)
}

/// Build the drilling program for `points`, visiting them in the given order.
///
/// The program starts with absolute positioning, the default feed rates and
/// a move to the safe height. Each point then gets a rapid move over the
/// hole, a plunge to `config.depth` and a retract to `config.height`.
pub fn drill_program<'a>(points: &'a [DrillPoint], config: &ToolConfig) -> Vec<Command<'a>> {
    let mut program = Vec::with_capacity(4 + 3 * points.len());

    program.push(absolute_distance_mode(std::iter::empty()));
    program.push(rapid_positioning([Field::new("f", RAPID_FEED_RATE)]));
    program.push(linear_interpolation([Field::new("f", LINEAR_FEED_RATE)]));
    program.push(rapid_positioning([z(config.height)]));

    for point in points {
        program.push(rapid_positioning([
            Field::new("x", point.x.as_str()),
            Field::new("y", point.y.as_str()),
        ]));
        program.push(linear_interpolation([z(config.depth)]));
        program.push(linear_interpolation([z(config.height)]));
    }

    program
}
