use std::fmt::{self, Write as FmtWrite};
use std::io::Write as IoWrite;

use super::{Command, Field, Value};

macro_rules! formatter_core {
    ($program: expr, $downstream: ident) => {
        let mut w = $downstream;
        for command in $program {
            writeln!(w, "{command}")?;
        }
    };
}

/// Write g-code commands to an [IoWrite], one command per line
pub fn format_gcode_io<'a: 'b, 'b, W>(
    program: impl IntoIterator<Item = &'b Command<'a>>,
    w: W,
) -> std::io::Result<()>
where
    W: IoWrite,
{
    formatter_core!(program.into_iter(), w);
    Ok(())
}

/// Write g-code commands to a [FmtWrite], one command per line
pub fn format_gcode_fmt<'a: 'b, 'b, W>(
    program: impl IntoIterator<Item = &'b Command<'a>>,
    w: W,
) -> fmt::Result
where
    W: FmtWrite,
{
    formatter_core!(program.into_iter(), w);
    Ok(())
}

/// Letters written as a word with their value, like the `f100` feed rate.
/// All other arguments put a space between letter and value.
const WORD_LETTERS: &[&str] = &["f"];

/// The name and feed rates are words, axes are spaced: `g0 f100`, `g0 x 100 y 200`.
impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for arg in self.iter_args() {
            if WORD_LETTERS
                .iter()
                .any(|word| arg.letters.eq_ignore_ascii_case(word))
            {
                write!(f, " {arg}")?;
            } else {
                write!(f, " {} {}", arg.letters, arg.value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letters, self.value)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{r}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}
