// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Remove escape sequences with the [`vte`] state machine. Only ESC based sequences
//! (CSI, OSC, DCS, ESC) are dropped. Printable characters and C0/C1 control characters
//! like `\t`, `\r`, BEL or NUL are kept as they are.

use vte::{Parser, Perform};

/// Remove every escape sequence from `input`. For any output of [`crate::format()`]
/// whose text contains no ESC character, this returns the original text.
///
/// ```
/// use r3bl_string_format::{FormatOptions, format, strip_formatting};
///
/// let it = format("Hi\tthere", &FormatOptions::default().fg((255, 0, 0)).italics()).unwrap();
/// assert_eq!(strip_formatting(&it), "Hi\tthere");
/// ```
#[must_use]
pub fn strip_formatting(input: &str) -> String {
    let mut performer = KeepTextPerformer {
        acc: String::with_capacity(input.len()),
    };
    Parser::new().advance(&mut performer, input.as_bytes());
    performer.acc
}

/// Collects everything the parser doesn't treat as part of an escape sequence.
#[derive(Debug)]
struct KeepTextPerformer {
    acc: String,
}

impl Perform for KeepTextPerformer {
    fn print(&mut self, ch: char) { self.acc.push(ch); }

    /// Called for C0 (`0x00..=0x1F`) and C1 (`U+0080..=U+009F`) controls. Since the
    /// input is a `&str`, a C1 byte here is the code point of the same value.
    fn execute(&mut self, byte: u8) { self.acc.push(char::from(byte)); }
}
