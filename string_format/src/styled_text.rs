// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{ColorInput, ColorTarget, FormatOptions, FormatResult, SgrCode};

/// The main struct that we have to consider is `StyledText`. It has two fields:
/// - `text` - the text to print, never modified.
/// - `style` - the resolved [`SgrCode`]s to emit before the text, in canonical order:
///   foreground, background, bold, thin, italics, underline, strikethrough. This is owned
///   in a stack allocated buffer sized for all seven.
///
/// Its [`Display`] output is every fragment in `style`, then `text`, then
/// [`SgrCode::Reset`]. Use [`StyledText::try_new`] (or [`format`]) to build one from
/// [`FormatOptions`], so that the order is always canonical.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_string_format::*;
///
/// let options = FormatOptions::default().fg("red").bold();
/// let styled_text = StyledText::try_new("Hi", &options).unwrap();
/// assert_eq!(styled_text.to_string(), "\x1b[31m\x1b[1mHi\x1b[0m");
/// styled_text.println();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::*;

    /// Attributes are: `fg_color`, `bg_color`, bold, thin, italics, underline,
    /// strikethrough.
    pub const MAX_STYLED_TEXT_STYLE_ATTRIB_SIZE: usize = 7;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_STYLED_TEXT_STYLE_ATTRIB_SIZE]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 64;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

mod styled_text_impl {
    use super::*;

    impl<'a> StyledText<'a> {
        /// Resolve every option. Colors are validated before anything else, so an error
        /// means nothing was built.
        ///
        /// # Errors
        ///
        /// See [`crate::FormatError`].
        pub fn try_new(text: &'a str, options: &FormatOptions) -> FormatResult<Self> {
            let mut style = sizing::InlineVecSgrCodes::new();
            style.extend(color_codes(
                options.fg_color.as_ref(),
                options.bg_color.as_ref(),
            )?);
            style.extend(options.flag_codes());
            Ok(Self { text, style })
        }

        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }

        /// Same output as the [Display] trait implementation, stored in an inline buffer
        /// that only spills to the heap when it gets larger than
        /// [`sizing::DEFAULT_STRING_STORAGE_SIZE`].
        #[must_use]
        pub fn to_small_str(&self) -> sizing::InlineString { format!("{self}").into() }
    }

    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for style_item in &self.style {
                write!(f, "{style_item}")?;
            }
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }
}

/// Wrap `text` in the fragments requested by `options`, followed by a reset.
///
/// ```
/// use r3bl_string_format::{FormatOptions, format};
///
/// let it = format("Hi", &FormatOptions::default().fg("red").bold()).unwrap();
/// assert_eq!(it, "\x1b[31m\x1b[1mHi\x1b[0m");
///
/// let plain = format("Hi", &FormatOptions::default()).unwrap();
/// assert_eq!(plain, "Hi\x1b[0m");
/// ```
///
/// # Errors
///
/// - [`crate::FormatError::InvalidColorValue`] for an index or RGB component outside
///   `0..=255`, or a tuple that is not 3 components long.
/// - [`crate::FormatError::UnknownColorName`] for a name not in [`crate::NamedColor`].
pub fn format(text: &str, options: &FormatOptions) -> FormatResult<String> {
    let styled_text = StyledText::try_new(text, options)?;
    tracing::trace!(style = ?styled_text.style, "formatting text");
    Ok(styled_text.to_string())
}

/// Fragment for `color` as foreground.
///
/// # Errors
///
/// See [`ColorInput::resolve`].
pub fn foreground_color(color: impl Into<ColorInput>) -> FormatResult<SgrCode> {
    let color = color.into().resolve(ColorTarget::Foreground)?;
    Ok(color.sgr_code(ColorTarget::Foreground))
}

/// Fragment for `color` as background.
///
/// # Errors
///
/// See [`ColorInput::resolve`].
pub fn background_color(color: impl Into<ColorInput>) -> FormatResult<SgrCode> {
    let color = color.into().resolve(ColorTarget::Background)?;
    Ok(color.sgr_code(ColorTarget::Background))
}

/// Color fragments only (foreground then background), without text or reset.
///
/// # Errors
///
/// See [`ColorInput::resolve`].
pub fn color_fragments(
    fg_color: Option<&ColorInput>,
    bg_color: Option<&ColorInput>,
) -> FormatResult<String> {
    Ok(concat_codes(&color_codes(fg_color, bg_color)?))
}

/// Style flag fragments only, without text or reset.
#[must_use]
pub fn font_fragments(options: &FormatOptions) -> String {
    concat_codes(&options.flag_codes())
}

fn color_codes(
    fg_color: Option<&ColorInput>,
    bg_color: Option<&ColorInput>,
) -> FormatResult<sizing::InlineVecSgrCodes> {
    let mut acc = sizing::InlineVecSgrCodes::new();
    for (input, target) in [
        (fg_color, ColorTarget::Foreground),
        (bg_color, ColorTarget::Background),
    ] {
        if let Some(input) = input {
            acc.push(input.resolve(target)?.sgr_code(target));
        }
    }
    Ok(acc)
}

fn concat_codes(codes: &[SgrCode]) -> String {
    codes.iter().map(ToString::to_string).collect()
}
