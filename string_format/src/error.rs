// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorTarget;

pub type FormatResult<T> = Result<T, FormatError>;

/// Errors from resolving a color argument. Both are raised before any output is built,
/// so a caller never sees a partially formatted string.
///
/// | Variant                | Cause                                                        |
/// | :--------------------- | :----------------------------------------------------------- |
/// | [`InvalidColorValue`]  | index or RGB component outside `0..=255`, or not 3 components |
/// | [`UnknownColorName`]   | name is not one of the 16 [`NamedColor`]s                    |
///
/// [`InvalidColorValue`]: Self::InvalidColorValue
/// [`UnknownColorName`]: Self::UnknownColorName
/// [`NamedColor`]: crate::NamedColor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum FormatError {
    #[error("🎨 Invalid value for {target}: {value}")]
    #[diagnostic(
        code(r3bl_string_format::invalid_color_value),
        help(
            "Use a palette index in 0..=255, or exactly 3 RGB components each in 0..=255"
        )
    )]
    InvalidColorValue {
        /// Which argument was rejected.
        target: ColorTarget,
        /// The rejected value, as given.
        value: String,
    },

    #[error("🔍 Unknown color name for {target}: '{name}'")]
    #[diagnostic(
        code(r3bl_string_format::unknown_color_name),
        help(
            "Use one of black, red, green, yellow, blue, magenta, cyan, white, \
             optionally prefixed with bright_"
        )
    )]
    UnknownColorName { target: ColorTarget, name: String },
}

impl FormatError {
    #[must_use]
    pub fn target(&self) -> ColorTarget {
        match self {
            FormatError::InvalidColorValue { target, .. }
            | FormatError::UnknownColorName { target, .. } => *target,
        }
    }
}
