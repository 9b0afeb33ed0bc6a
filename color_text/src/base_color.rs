// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Result;

use strum_macros::{Display, EnumCount, EnumIter};

use crate::{BG_BLACK, BLACK, BOLD, EffectCode, OutputDevice, apply_scoped,
            println_colored};

/// The eight 4-bit base colors, in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    /// [`BLACK`] (`30`) through [`crate::WHITE`] (`37`).
    #[must_use]
    pub const fn fg_code(self) -> EffectCode { BLACK + self as EffectCode }

    /// [`BG_BLACK`] (`40`) through [`crate::BG_WHITE`] (`47`).
    #[must_use]
    pub const fn bg_code(self) -> EffectCode { BG_BLACK + self as EffectCode }

    /// Run `operation` with this color as the foreground and [`BOLD`] applied, then
    /// restore the default style. See [`apply_scoped()`].
    ///
    /// # Errors
    ///
    /// If writing the escape sequences fails, or `operation` fails.
    pub fn run_bold<T, E>(
        self,
        output_device: &OutputDevice,
        operation: impl FnOnce(&OutputDevice) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<std::io::Error>,
    {
        apply_scoped(output_device, self.fg_code(), &[BOLD], operation)
    }

    /// Print `text` and a newline in this color, bold.
    ///
    /// # Errors
    ///
    /// If any write to `output_device` fails.
    pub fn println_bold(self, output_device: &OutputDevice, text: &str) -> Result<()> {
        println_colored(output_device, text, self.fg_code(), &[BOLD])
    }
}

/// Print `text` and a newline in bold black.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_black(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Black.println_bold(output_device, text)
}

/// Print `text` and a newline in bold red.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_red(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Red.println_bold(output_device, text)
}

/// Print `text` and a newline in bold green.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_green(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Green.println_bold(output_device, text)
}

/// Print `text` and a newline in bold yellow.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_yellow(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Yellow.println_bold(output_device, text)
}

/// Print `text` and a newline in bold blue.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_blue(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Blue.println_bold(output_device, text)
}

/// Print `text` and a newline in bold magenta.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_magenta(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Magenta.println_bold(output_device, text)
}

/// Print `text` and a newline in bold cyan.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_cyan(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::Cyan.println_bold(output_device, text)
}

/// Print `text` and a newline in bold white.
///
/// # Errors
///
/// If any write to `output_device` fails.
pub fn print_white(output_device: &OutputDevice, text: &str) -> Result<()> {
    BaseColor::White.println_bold(output_device, text)
}
