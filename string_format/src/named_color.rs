// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 color palette. The numeric codes are fixed by the SGR standard; what the
//! colors actually look like depends on the terminal's theme.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Names are parsed case insensitively in `snake_case`, eg: `"red"`, `"Bright_Red"`.
/// `purple` is accepted as an alias for `magenta`.
///
/// ```
/// use r3bl_string_format::NamedColor;
///
/// let color: NamedColor = "bright_cyan".parse().unwrap();
/// assert_eq!(color, NamedColor::BrightCyan);
/// assert_eq!(color.fg_code(), 96);
/// assert_eq!(color.bg_code(), 106);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    #[strum(to_string = "magenta", serialize = "purple")]
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    #[strum(to_string = "bright_magenta", serialize = "bright_purple")]
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const FG_BASE: u8 = 30;
const BG_BASE: u8 = 40;
const FG_BRIGHT_BASE: u8 = 90;
const BG_BRIGHT_BASE: u8 = 100;

impl NamedColor {
    /// Position within its group of 8 (normal or bright).
    #[rustfmt::skip]
    #[must_use]
    pub const fn offset(self) -> u8 {
        match self {
            NamedColor::Black   | NamedColor::BrightBlack   => 0,
            NamedColor::Red     | NamedColor::BrightRed     => 1,
            NamedColor::Green   | NamedColor::BrightGreen   => 2,
            NamedColor::Yellow  | NamedColor::BrightYellow  => 3,
            NamedColor::Blue    | NamedColor::BrightBlue    => 4,
            NamedColor::Magenta | NamedColor::BrightMagenta => 5,
            NamedColor::Cyan    | NamedColor::BrightCyan    => 6,
            NamedColor::White   | NamedColor::BrightWhite   => 7,
        }
    }

    #[must_use]
    pub const fn is_bright(self) -> bool {
        matches!(
            self,
            NamedColor::BrightBlack
                | NamedColor::BrightRed
                | NamedColor::BrightGreen
                | NamedColor::BrightYellow
                | NamedColor::BrightBlue
                | NamedColor::BrightMagenta
                | NamedColor::BrightCyan
                | NamedColor::BrightWhite
        )
    }

    /// SGR parameter for this color as foreground: 30-37, or 90-97 if bright.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        if self.is_bright() {
            FG_BRIGHT_BASE + self.offset()
        } else {
            FG_BASE + self.offset()
        }
    }

    /// SGR parameter for this color as background: 40-47, or 100-107 if bright.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        if self.is_bright() {
            BG_BRIGHT_BASE + self.offset()
        } else {
            BG_BASE + self.offset()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test_case("black", NamedColor::Black, 30, 40)]
    #[test_case("red", NamedColor::Red, 31, 41)]
    #[test_case("green", NamedColor::Green, 32, 42)]
    #[test_case("yellow", NamedColor::Yellow, 33, 43)]
    #[test_case("blue", NamedColor::Blue, 34, 44)]
    #[test_case("magenta", NamedColor::Magenta, 35, 45)]
    #[test_case("cyan", NamedColor::Cyan, 36, 46)]
    #[test_case("white", NamedColor::White, 37, 47)]
    #[test_case("bright_black", NamedColor::BrightBlack, 90, 100)]
    #[test_case("bright_red", NamedColor::BrightRed, 91, 101)]
    #[test_case("bright_green", NamedColor::BrightGreen, 92, 102)]
    #[test_case("bright_yellow", NamedColor::BrightYellow, 93, 103)]
    #[test_case("bright_blue", NamedColor::BrightBlue, 94, 104)]
    #[test_case("bright_magenta", NamedColor::BrightMagenta, 95, 105)]
    #[test_case("bright_cyan", NamedColor::BrightCyan, 96, 106)]
    #[test_case("bright_white", NamedColor::BrightWhite, 97, 107)]
    fn test_name_and_codes(name: &str, expected: NamedColor, fg: u8, bg: u8) {
        let color = NamedColor::from_str(name).unwrap();
        assert_eq!(color, expected);
        assert_eq!(color.fg_code(), fg);
        assert_eq!(color.bg_code(), bg);
        assert_eq!(color.to_string(), name);
    }

    #[test_case("purple", NamedColor::Magenta)]
    #[test_case("bright_purple", NamedColor::BrightMagenta)]
    #[test_case("RED", NamedColor::Red)]
    #[test_case("Bright_Blue", NamedColor::BrightBlue)]
    fn test_aliases_and_case(name: &str, expected: NamedColor) {
        assert_eq!(NamedColor::from_str(name).unwrap(), expected);
    }

    #[test_case("periwinkle")]
    #[test_case("")]
    #[test_case("brightred")]
    #[test_case(" red")]
    fn test_unknown_names(name: &str) {
        assert!(NamedColor::from_str(name).is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(NamedColor::COUNT, 16);
        let fg: HashSet<u8> = NamedColor::iter().map(NamedColor::fg_code).collect();
        let bg: HashSet<u8> = NamedColor::iter().map(NamedColor::bg_code).collect();
        assert_eq!(fg.len(), NamedColor::COUNT);
        assert_eq!(bg.len(), NamedColor::COUNT);
        assert!(fg.is_disjoint(&bg));
    }
}
