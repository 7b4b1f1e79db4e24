use rust_decimal::Decimal;

use std::borrow::Cow;

/// Fundamental unit of g-code: a descriptive letter followed by a value.
///
/// Field type supports owned and partially-borrowed representations using [Cow].
#[derive(Clone, PartialEq, Debug)]
pub struct Field<'a> {
    pub letters: Cow<'a, str>,
    pub value: Value<'a>,
}

impl<'a> Field<'a> {
    pub fn new(letters: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self {
            letters: letters.into(),
            value: value.into(),
        }
    }
}

/// All the possible variations of a field's value.
#[derive(Clone, PartialEq, Debug)]
pub enum Value<'a> {
    /// A real number, such as a configured Z height
    Rational(Decimal),
    /// An unsigned integer, such as the 0 in G0 or a feed rate
    Integer(usize),
    /// Numeric text copied verbatim from the input,
    /// such as a drill file coordinate
    Raw(Cow<'a, str>),
}

impl From<Decimal> for Value<'_> {
    fn from(value: Decimal) -> Self {
        Self::Rational(value)
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Self::Integer(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Self::Raw(Cow::Borrowed(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Value::from(10usize), Value::Integer(10));
        assert_eq!(
            Value::from(Decimal::new(-125, 3)),
            Value::Rational(Decimal::new(-125, 3))
        );
        assert_eq!(Value::from("3.25"), Value::Raw(Cow::Borrowed("3.25")));
    }
}
