peg::parser! {
    pub grammar excellon() for str {
        rule whitespace() = quiet! { [c if c.is_whitespace()]* };
        rule digits() -> &'input str = quiet! { $(['0'..='9']+) } / expected!("digits");
        rule minus() -> &'input str = quiet! { $("-") } / expected!("minus sign");
        rule dot() -> &'input str = quiet! { $(".") } / expected!("decimal point");

        /// A coordinate value, returned exactly as written.
        ///
        /// PEG choices do not backtrack once one succeeds, so the
        /// longest form is tried first. Only ASCII digits `0-9` are accepted.
        pub rule number() -> &'input str
            = $(minus()? digits() dot() digits())
            / $(minus()? digits())
            / $(minus()? dot() digits());

        /// A line giving both axes, e.g. `X100Y200`
        pub rule xy_line() -> (&'input str, &'input str)
            = whitespace() "X" x:number() "Y" y:number() { (x, y) };

        /// A line giving only the X axis, e.g. `X150`
        pub rule x_line() -> &'input str = whitespace() "X" x:number() { x };

        /// A line giving only the Y axis, e.g. `Y300`
        pub rule y_line() -> &'input str = whitespace() "Y" y:number() { y };
    }
}
