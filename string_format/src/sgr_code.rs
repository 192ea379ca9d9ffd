// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every fragment this crate can emit is one SGR (select graphic rendition) sequence:
//! `ESC [ <params> m`.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::NamedColor;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// SGR Reset sequence. Clears color, weight and decoration.
pub const SGR_RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    /// Faint / decreased intensity, which is what "thin" maps to.
    Dim,
    Italic,
    Underline,
    Strikethrough,
    ForegroundBasic(NamedColor),
    BackgroundBasic(NamedColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl Display for SgrCode {
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
            SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
            SgrCode::Dim                      => write!(f, "{CSI}2{SGR}"),
            SgrCode::Italic                   => write!(f, "{CSI}3{SGR}"),
            SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
            SgrCode::Strikethrough            => write!(f, "{CSI}9{SGR}"),
            SgrCode::ForegroundBasic(color)   => write!(f, "{CSI}{}{SGR}", color.fg_code()),
            SgrCode::BackgroundBasic(color)   => write!(f, "{CSI}{}{SGR}", color.bg_code()),
            SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
            SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
            SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
        }
    }
}
