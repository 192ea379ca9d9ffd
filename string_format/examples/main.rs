// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_string_format::{FormatOptions, NamedColor, StyledText, format};
use strum::IntoEnumIterator;

fn main() -> miette::Result<()> {
    // Set `RUST_LOG=trace` to see the resolved fragments.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Print a string w/ ANSI color codes.
    {
        let options = FormatOptions::default()
            .fg((50, 50, 50))
            .bg((100, 200, 1))
            .bold()
            .italics()
            .underline();
        StyledText::try_new(
            "Print a formatted (bold, italic, underline) string w/ ANSI color codes.",
            &options,
        )?
        .println();

        let options = FormatOptions::default()
            .fg((200, 50, 50))
            .bg((200, 200, 1))
            .thin()
            .strikethrough();
        println!("{}", format("Thin and strikethrough line.", &options)?);
    }

    // 16 color palette.
    {
        for color in NamedColor::iter() {
            let options = FormatOptions::default().fg(color);
            print!("{} ", format(&color.to_string(), &options)?);
        }
        println!();
        for color in NamedColor::iter() {
            let options = FormatOptions::default().bg(color).fg("black");
            print!("{} ", format(&color.to_string(), &options)?);
        }
        println!();
    }

    // 256 color palette.
    {
        for index in 0..=255_i64 {
            let options = FormatOptions::default().bg(index);
            print!("{}", format("  ", &options)?);
            if index % 16 == 15 {
                println!();
            }
        }
    }

    // Errors are reported w/ miette.
    {
        let result = format("oops", &FormatOptions::default().fg("periwinkle"));
        if let Err(err) = result {
            println!("{:?}", miette::Report::new(err));
        }
    }

    Ok(())
}
