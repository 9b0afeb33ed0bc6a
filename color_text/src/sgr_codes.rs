// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) parameter codes.
//!
//! These are standardized terminal codes, so the numeric values must not change. Every
//! code here is a single parameter in an escape sequence like `ESC [ 31 ; 1 m`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

/// A single SGR parameter. Effects are passed through to the terminal as is, so any
/// value in `0..=255` is accepted, not just the ones defined in this module. SGR
/// defines no parameter above `107`.
pub type EffectCode = u8;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Final byte of an SGR sequence.
pub const SGR: &str = "m";
/// Separates parameters inside a sequence.
pub const PARAM_SEPARATOR: char = ';';

// Text effects.

/// Reset all colors and effects.
pub const DEFAULT: EffectCode = 0;
/// Bold, or increased color intensity.
pub const BOLD: EffectCode = 1;
/// Faint, or decreased color intensity.
pub const FAINT: EffectCode = 2;
pub const ITALIC: EffectCode = 3;
pub const UNDERLINE: EffectCode = 4;
/// Less than 150 blinks per minute.
pub const SLOW_BLINK: EffectCode = 5;
/// More than 150 blinks per minute.
pub const RAPID_BLINK: EffectCode = 6;
/// Swap foreground and background colors.
pub const INVERSE: EffectCode = 7;
pub const CONCEAL: EffectCode = 8;
pub const CROSSED_OUT: EffectCode = 9;
/// Select the primary (default) font.
pub const PRIMARY_FONT: EffectCode = 10;
pub const ALT_FONT: EffectCode = 11;
pub const FRAKTUR: EffectCode = 20;

// Disable text effects.

pub const DISABLE_BOLD: EffectCode = 21;
pub const DISABLE_BOLD_FAINT: EffectCode = 22;
pub const DISABLE_ITALIC_FRAKTUR: EffectCode = 23;
pub const DISABLE_UNDERLINE: EffectCode = 24;
pub const DISABLE_BLINK: EffectCode = 25;
pub const DISABLE_INVERSE: EffectCode = 27;
pub const DISABLE_CONCEAL: EffectCode = 28;
pub const DISABLE_CROSSED_OUT: EffectCode = 29;

// 4-bit foreground colors.

pub const BLACK: EffectCode = 30;
pub const RED: EffectCode = 31;
pub const GREEN: EffectCode = 32;
pub const YELLOW: EffectCode = 33;
pub const BLUE: EffectCode = 34;
pub const MAGENTA: EffectCode = 35;
pub const CYAN: EffectCode = 36;
pub const WHITE: EffectCode = 37;

/// Target code for 8-bit and 24-bit foreground colors. See [`crate::ColorTarget`].
pub const FOREGROUND: EffectCode = 38;
/// Reset the foreground color only.
pub const DEFAULT_FOREGROUND: EffectCode = 39;

// 4-bit background colors.

pub const BG_BLACK: EffectCode = 40;
pub const BG_RED: EffectCode = 41;
pub const BG_GREEN: EffectCode = 42;
pub const BG_YELLOW: EffectCode = 43;
pub const BG_BLUE: EffectCode = 44;
pub const BG_MAGENTA: EffectCode = 45;
pub const BG_CYAN: EffectCode = 46;
pub const BG_WHITE: EffectCode = 47;

/// Target code for 8-bit and 24-bit background colors. See [`crate::ColorTarget`].
pub const BACKGROUND: EffectCode = 48;
/// Reset the background color only.
pub const DEFAULT_BACKGROUND: EffectCode = 49;

// Other text effects.

pub const FRAMED: EffectCode = 51;
pub const ENCIRCLED: EffectCode = 52;
pub const OVERLINED: EffectCode = 53;
pub const DISABLE_FRAMED_ENCIRCLED: EffectCode = 54;
pub const DISABLE_OVERLINED: EffectCode = 55;

// Ideogram effects.

pub const IDEOGRAM_UNDERLINE: EffectCode = 60;
pub const IDEOGRAM_DOUBLE_UNDERLINE: EffectCode = 61;
pub const IDEOGRAM_OVERLINE: EffectCode = 62;
pub const IDEOGRAM_DOUBLE_OVERLINE: EffectCode = 63;
pub const IDEOGRAM_STRESS_MARKING: EffectCode = 64;
pub const DISABLE_IDEOGRAM_EFFECTS: EffectCode = 65;

/// Mode indicator that follows [`FOREGROUND`] / [`BACKGROUND`] for an 8-bit palette
/// color.
pub const MODE_ANSI256: EffectCode = 5;
/// Mode indicator that follows [`FOREGROUND`] / [`BACKGROUND`] for a 24-bit RGB color.
pub const MODE_RGB: EffectCode = 2;
