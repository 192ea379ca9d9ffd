// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A color argument arrives as a [`ColorInput`], which may hold anything a caller (or a
//! config file) hands over, and is resolved into a [`Color`], which can only hold values
//! that map onto an SGR sequence.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{FormatError, FormatResult, NamedColor, SgrCode};

/// Which argument a color was passed as. Its [`Display`] output is the option name, so
/// errors can point at the offending argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ColorTarget {
    #[strum(serialize = "fg_color")]
    Foreground,
    #[strum(serialize = "bg_color")]
    Background,
}

/// Unvalidated color argument. Deserializes untagged from a string, an integer or an
/// array, eg: `"red"`, `196`, `[255, 128, 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Name(String),
    Index(i64),
    Components(Vec<i64>),
}

/// Validated color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Indexed(u8),
    Rgb(RgbValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

mod color_input_impl {
    use super::*;

    impl ColorInput {
        /// Validate this argument for the given `target`.
        ///
        /// # Errors
        ///
        /// - [`FormatError::UnknownColorName`] if a name is not in the 16 color palette.
        /// - [`FormatError::InvalidColorValue`] if an index or component is outside
        ///   `0..=255`, or if there are not exactly 3 components.
        pub fn resolve(&self, target: ColorTarget) -> FormatResult<Color> {
            let result = match self {
                ColorInput::Name(name) => name
                    .parse::<NamedColor>()
                    .map(Color::Named)
                    .map_err(|_| FormatError::UnknownColorName {
                        target,
                        name: name.clone(),
                    }),
                ColorInput::Index(index) => {
                    u8::try_from(*index).map(Color::Indexed).map_err(|_| {
                        FormatError::InvalidColorValue {
                            target,
                            value: index.to_string(),
                        }
                    })
                }
                ColorInput::Components(components) => {
                    try_rgb(components).map(Color::Rgb).ok_or_else(|| {
                        FormatError::InvalidColorValue {
                            target,
                            value: format!("{components:?}"),
                        }
                    })
                }
            };

            if let Err(ref err) = result {
                tracing::debug!(input = ?self, %err, "could not resolve color");
            }

            result
        }
    }

    fn try_rgb(components: &[i64]) -> Option<RgbValue> {
        let [red, green, blue] = components else {
            return None;
        };
        Some(RgbValue {
            red: u8::try_from(*red).ok()?,
            green: u8::try_from(*green).ok()?,
            blue: u8::try_from(*blue).ok()?,
        })
    }

    impl From<&str> for ColorInput {
        fn from(name: &str) -> Self { ColorInput::Name(name.to_owned()) }
    }

    impl From<String> for ColorInput {
        fn from(name: String) -> Self { ColorInput::Name(name) }
    }

    impl From<NamedColor> for ColorInput {
        fn from(color: NamedColor) -> Self { ColorInput::Name(color.to_string()) }
    }

    impl From<u8> for ColorInput {
        fn from(index: u8) -> Self { ColorInput::Index(i64::from(index)) }
    }

    impl From<i32> for ColorInput {
        fn from(index: i32) -> Self { ColorInput::Index(i64::from(index)) }
    }

    impl From<i64> for ColorInput {
        fn from(index: i64) -> Self { ColorInput::Index(index) }
    }

    impl From<(u8, u8, u8)> for ColorInput {
        fn from((r, g, b): (u8, u8, u8)) -> Self {
            ColorInput::Components(vec![i64::from(r), i64::from(g), i64::from(b)])
        }
    }

    impl From<(i32, i32, i32)> for ColorInput {
        fn from((r, g, b): (i32, i32, i32)) -> Self {
            ColorInput::Components(vec![i64::from(r), i64::from(g), i64::from(b)])
        }
    }

    impl From<Vec<i64>> for ColorInput {
        fn from(components: Vec<i64>) -> Self { ColorInput::Components(components) }
    }

    impl From<&[i64]> for ColorInput {
        fn from(components: &[i64]) -> Self { ColorInput::Components(components.to_vec()) }
    }

    impl From<RgbValue> for ColorInput {
        fn from(RgbValue { red, green, blue }: RgbValue) -> Self {
            ColorInput::from((red, green, blue))
        }
    }
}

mod color_impl {
    use super::*;

    impl Color {
        /// The fragment that applies this color to `target`.
        #[rustfmt::skip]
        #[must_use]
        pub fn sgr_code(self, target: ColorTarget) -> SgrCode {
            match (self, target) {
                (Color::Named(it), ColorTarget::Foreground)   => SgrCode::ForegroundBasic(it),
                (Color::Named(it), ColorTarget::Background)   => SgrCode::BackgroundBasic(it),
                (Color::Indexed(it), ColorTarget::Foreground) => SgrCode::ForegroundAnsi256(it),
                (Color::Indexed(it), ColorTarget::Background) => SgrCode::BackgroundAnsi256(it),
                (Color::Rgb(RgbValue { red, green, blue }), ColorTarget::Foreground) => {
                    SgrCode::ForegroundRGB(red, green, blue)
                }
                (Color::Rgb(RgbValue { red, green, blue }), ColorTarget::Background) => {
                    SgrCode::BackgroundRGB(red, green, blue)
                }
            }
        }
    }

    impl From<NamedColor> for Color {
        fn from(color: NamedColor) -> Self { Color::Named(color) }
    }

    impl From<u8> for Color {
        fn from(index: u8) -> Self { Color::Indexed(index) }
    }

    impl From<RgbValue> for Color {
        fn from(rgb: RgbValue) -> Self { Color::Rgb(rgb) }
    }

    impl From<(u8, u8, u8)> for Color {
        fn from(rgb: (u8, u8, u8)) -> Self { Color::Rgb(rgb.into()) }
    }
}
