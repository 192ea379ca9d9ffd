// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_string_format`
//!
//! Wrap a string in ANSI SGR (select graphic rendition) sequences: foreground and
//! background color (16 color names, 256 color palette index, or 24-bit truecolor) plus
//! bold, thin, italics, underline and strikethrough. The output is ready to be written
//! to a terminal.
//!
//! ```
//! use r3bl_string_format::{FormatOptions, format};
//!
//! let options = FormatOptions::default().fg("red").bg((50, 50, 50)).bold();
//! let it = format("Hello", &options).unwrap();
//! assert_eq!(it, "\x1b[31m\x1b[48;2;50;50;50m\x1b[1mHello\x1b[0m");
//! ```
//!
//! The fragments are always emitted in the same order: foreground, background, bold,
//! thin, italics, underline, strikethrough. A reset (`ESC[0m`) is always appended, even
//! when no option is set.
//!
//! This crate does not detect whether the terminal supports color.

// Enable strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Private modules.
mod color;
mod error;
mod format_options;
mod named_color;
mod sgr_code;
mod strip;
mod styled_text;

// Re-export flat public API.
pub use color::*;
pub use error::*;
pub use format_options::*;
pub use named_color::*;
pub use sgr_code::*;
pub use strip::*;
pub use styled_text::*;
