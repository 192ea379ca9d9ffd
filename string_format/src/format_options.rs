// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{ColorInput, SgrCode, sizing::InlineVecSgrCodes};

/// The seven options recognized by [`crate::format()`]. Every field defaults to "no
/// effect": no colors, all flags off.
///
/// Build it with struct update syntax, the fluent methods, or deserialize it from a
/// config file. Unknown keys are rejected when deserializing.
///
/// ```
/// use r3bl_string_format::FormatOptions;
///
/// let from_builder = FormatOptions::default().fg("red").bold();
/// let from_json: FormatOptions =
///     serde_json::from_str(r#"{ "fg_color": "red", "bold": true }"#).unwrap();
/// assert_eq!(from_builder, from_json);
///
/// let unknown_key = serde_json::from_str::<FormatOptions>(r#"{ "blink": true }"#);
/// assert!(unknown_key.is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<ColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<ColorInput>,
    pub bold: bool,
    pub thin: bool,
    pub italics: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl FormatOptions {
    #[must_use]
    pub fn fg(mut self, color: impl Into<ColorInput>) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<ColorInput>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn thin(mut self) -> Self {
        self.thin = true;
        self
    }

    #[must_use]
    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Fragments for the active flags, in the order bold, thin, italics, underline,
    /// strikethrough.
    #[must_use]
    pub fn flag_codes(&self) -> InlineVecSgrCodes {
        [
            (self.bold, SgrCode::Bold),
            (self.thin, SgrCode::Dim),
            (self.italics, SgrCode::Italic),
            (self.underline, SgrCode::Underline),
            (self.strikethrough, SgrCode::Strikethrough),
        ]
        .into_iter()
        .filter_map(|(is_set, code)| is_set.then_some(code))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn test_default_has_no_effect() {
        let it = FormatOptions::default();
        assert_eq!(it.fg_color, None);
        assert_eq!(it.bg_color, None);
        assert!(it.flag_codes().is_empty());
    }

    #[test]
    fn test_builder() {
        let it = FormatOptions::default()
            .fg("red")
            .bg(236)
            .bold()
            .thin()
            .italics()
            .underline()
            .strikethrough();
        assert_eq!(
            it,
            FormatOptions {
                fg_color: Some(ColorInput::Name("red".into())),
                bg_color: Some(ColorInput::Index(236)),
                bold: true,
                thin: true,
                italics: true,
                underline: true,
                strikethrough: true,
            }
        );
    }

    #[test]
    fn test_flag_codes_order() {
        let all = FormatOptions::default()
            .strikethrough()
            .underline()
            .italics()
            .thin()
            .bold();
        let expected: InlineVecSgrCodes = smallvec![
            SgrCode::Bold,
            SgrCode::Dim,
            SgrCode::Italic,
            SgrCode::Underline,
            SgrCode::Strikethrough,
        ];
        assert_eq!(all.flag_codes(), expected);

        let some = FormatOptions {
            italics: true,
            strikethrough: true,
            ..Default::default()
        };
        let expected: InlineVecSgrCodes =
            smallvec![SgrCode::Italic, SgrCode::Strikethrough];
        assert_eq!(some.flag_codes(), expected);
    }

    #[test]
    fn test_deserialize() {
        let it: FormatOptions = serde_json::from_str(
            r#"{ "fg_color": [255, 0, 128], "bg_color": "bright_black", "underline": true }"#,
        )
        .unwrap();
        assert_eq!(
            it,
            FormatOptions::default()
                .fg(vec![255_i64, 0, 128])
                .bg("bright_black")
                .underline()
        );
    }

    #[test]
    fn test_deserialize_empty_is_default() {
        let it: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(it, FormatOptions::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let it = serde_json::from_str::<FormatOptions>(r#"{ "bold": true, "blink": true }"#);
        assert!(it.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_colors() {
        let it = serde_json::to_string(&FormatOptions::default().bold()).unwrap();
        assert_eq!(
            it,
            r#"{"bold":true,"thin":false,"italics":false,"underline":false,"strikethrough":false}"#
        );
    }
}
