// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use r3bl_color_text::{BACKGROUND, BOLD, BaseColor, CROSSED_OUT, ColorTarget, DEFAULT,
                      FOREGROUND, ITALIC, OutputDevice, OVERLINED, RED, StyledText,
                      UNDERLINE, YELLOW, apply_scoped, combine, encode_palette_8bit,
                      encode_rgb, lock_output_device_as_mut, print_blue, print_red,
                      println_colored, wrap};
use strum::IntoEnumIterator;

fn main() -> miette::Result<()> {
    // Logs go to stderr so they don't mix with the colored output.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let device = OutputDevice::new_stdout();

    // Wrap strings.
    {
        println!("{}", wrap("Bold red text.", RED, &[BOLD]));
        println!(
            "{}",
            StyledText::new("Italic, underlined yellow on 256 color grey.")
                .fg(YELLOW)
                .bg(encode_palette_8bit(236, BACKGROUND)?)
                .effect(ITALIC)
                .effect(UNDERLINE)
        );
    }

    // Truecolor foreground and background in one sequence.
    {
        let color = combine(
            encode_rgb(200, 50, 50, FOREGROUND)?,
            encode_rgb(200, 200, 1, ColorTarget::Background)?,
        );
        println_colored(
            &device,
            "Crossed out, overlined, RGB on RGB.",
            color,
            &[CROSSED_OUT, OVERLINED],
        )
        .into_diagnostic()?;
    }

    // Every base color, bold.
    for color in BaseColor::iter() {
        color
            .println_bold(&device, &format!("> {color}"))
            .into_diagnostic()?;
    }
    print_red(&device, "print_red").into_diagnostic()?;
    print_blue(&device, "print_blue").into_diagnostic()?;

    // The default style is restored even though the operation fails.
    {
        let result: std::io::Result<()> = apply_scoped(&device, RED, &[BOLD], |device| {
            let out = lock_output_device_as_mut!(device);
            writeln!(out, "This operation fails, the style is still reset.")?;
            Err(std::io::Error::other("simulated failure"))
        });
        println!("{}", wrap(&format!("Result: {result:?}"), DEFAULT, &[]));
    }

    // Invalid arguments are errors, not clamped values.
    {
        let error = encode_rgb(300, 0, -1, FOREGROUND).expect_err("out of range");
        println!("{:?}", miette::Report::new(error));
    }

    Ok(())
}
