//! Higher-level constructs for g-code emission

use paste::paste;

use std::borrow::Cow;

use super::{Field, Value};

macro_rules! impl_commands {
    ($($(#[$outer:meta])* $commandName: ident {$letters: expr, $value: literal, {$($(#[$inner:meta])* $arg: ident), *} } )*) => {

        paste! {
            $(
                $(#[$outer])*
                ///
                /// Arguments with letters this command doesn't accept are dropped.
                pub fn [<$commandName:snake:lower>]<'a, I: IntoIterator<Item = Field<'a>>>(args: I) -> Command<'a> {
                    Command {
                        name: [<$commandName:snake:upper _FIELD>],
                        args: args.into_iter().filter(|arg| {
                            match arg.letters.to_ascii_uppercase().as_str() {
                                $(stringify!($arg) => true,)*
                                _ => false
                            }
                        }).collect(),
                    }
                }

                /// Constant for this command's name used to reduce allocations.
                pub const [<$commandName:snake:upper _FIELD>]: Field<'static> = Field {
                    letters: Cow::Borrowed($letters),
                    value: Value::Integer($value),
                };
            )*
        }

        /// Commands are the operational unit of g-code
        ///
        /// They consist of a G or other top-level field followed by field arguments
        #[derive(Clone, PartialEq, Debug)]
        pub struct Command<'a> {
            name: Field<'a>,
            args: Vec<Field<'a>>,
        }

        impl<'a> Command<'a> {
            /// Add a field to the command.
            ///
            /// Returns an error if the Field's letters aren't recognized.
            pub fn push(&mut self, arg: Field<'a>) -> Result<(), &'static str> {
                paste! {
                    match &self.name {
                        $(x if *x == [<$commandName:snake:upper _FIELD>] => {
                            match arg.letters.to_ascii_uppercase().as_str() {
                                $(stringify!($arg) => {
                                    self.args.push(arg);
                                    Ok(())
                                },)*
                                _ => Err("unexpected argument for this command"),
                            }
                        },)*
                        _ => Err("unknown command"),
                    }
                }
            }

            /// The field naming this command, such as `g0`
            pub fn name(&self) -> &Field<'a> {
                &self.name
            }

            /// Iterate over all fields including the command's name.
            pub fn iter(&self) -> impl Iterator<Item = &Field<'a>> {
                std::iter::once(&self.name).chain(self.args.iter())
            }

            /// Iterate over the arguments, skipping the command's name.
            pub fn iter_args(&self) -> impl Iterator<Item = &Field<'a>> {
                self.args.iter()
            }

            /// Find the argument with the given letters, ignoring case.
            pub fn get(&self, letters: &str) -> Option<&Field<'a>> {
                self.iter_args()
                    .find(|arg| arg.letters.eq_ignore_ascii_case(letters))
            }
        }
    };
}

impl_commands!(
    /// Moves the head at the fastest possible speed to the desired position
    ///
    /// Never enter a cut with rapid positioning
    RapidPositioning {
        "g", 0, {
            X,
            Y,
            Z,
            F
        }
    }
    /// Typically used for "cutting" motion, here the drill plunge and retract
    LinearInterpolation {
        "g", 1, {
            X,
            Y,
            Z,
            F
        }
    }
    /// In absolute distance mode, axis numbers represent positions in the current coordinate system.
    AbsoluteDistanceMode {
        "g", 90, {}
    }
);
