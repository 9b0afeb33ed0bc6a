// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_text
//!
//! Rust crate to generate ANSI SGR (Select Graphic Rendition) escape sequences for 4-bit,
//! 8-bit (256 color palette) and 24-bit (truecolor) colors, plus text effects like bold,
//! underline, blink, etc. And to run output in a terminal style, restoring the default
//! style afterwards.
//!
//! It does not detect terminal capabilities, parse escape sequences, or emit anything
//! other than SGR sequences (no cursor movement or screen clearing).
//!
//! ## Building blocks
//!
//! 1. [`sgr_codes`] - the numeric codes, eg: [`BOLD`] (`1`), [`RED`] (`31`), [`BG_BLUE`]
//!    (`44`), [`FOREGROUND`] (`38`).
//! 2. [`encode_palette_8bit()`], [`encode_rgb()`] and [`combine()`] - validate and encode
//!    colors into a [`ColorSpec`]. Values outside `0..=255` are an [`InvalidArgument`]
//!    error, they are never clamped.
//! 3. [`build_sequence()`] and [`wrap()`] - assemble the escape sequence, and surround
//!    text with it and a reset.
//! 4. [`apply_scoped()`] - write a style to an [`OutputDevice`], run an operation, then
//!    restore the default style on every exit path (success, error, or panic).
//!
//! ```text
//! sgr_codes ──▶ color_spec ──▶ style_spec ──┬──▶ styled_text (String)
//!                                           └──▶ scoped_style (OutputDevice)
//! ```
//!
//! ## Example usage
//!
//! ```rust
//! use r3bl_color_text::*;
//!
//! // Wrap text.
//! assert_eq!(wrap("hi", RED, &[BOLD]), "\x1b[31;1mhi\x1b[0m");
//!
//! // 8-bit foreground on a 24-bit background.
//! let color = combine(
//!     encode_palette_8bit(5, FOREGROUND).unwrap(),
//!     encode_rgb(0, 0, 128, BACKGROUND).unwrap(),
//! );
//! assert_eq!(
//!     build_sequence(color, &[UNDERLINE]).as_str(),
//!     "\x1b[38;5;5;48;2;0;0;128;4m"
//! );
//!
//! // Out of range values are rejected.
//! assert!(encode_palette_8bit(256, FOREGROUND).is_err());
//!
//! // Scoped style, captured by a mock device instead of stdout.
//! use r3bl_color_text::test_fixtures::OutputDeviceExt;
//! let (device, stdout_mock) = OutputDevice::new_mock();
//! print_green(&device, "done").unwrap();
//! assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[32;1mdone\n\x1b[0m");
//! ```
//!
//! ## Concurrency
//!
//! Every function here is synchronous. An [`OutputDevice`] serializes individual writes,
//! but [`apply_scoped()`] is several writes. If multiple threads print in color to the
//! same device, the caller must serialize those calls (eg: one mutex guarding all
//! colored output), otherwise styles may bleed across each other's text.
//!
//! ## Logging
//!
//! Uses [`tracing`] and does not install a subscriber. Rejected arguments are logged at
//! `debug`, scoped style application at `trace`, and a failed restore write (when an
//! operation already failed) at `warn`.

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod sgr_codes;
pub mod test_fixtures;

mod base_color;
mod color_spec;
mod error;
mod output_device;
mod scoped_style;
mod style_spec;
mod styled_text;

// Re-export.
pub use base_color::*;
pub use color_spec::*;
pub use error::*;
pub use output_device::*;
pub use scoped_style::*;
pub use sgr_codes::*;
pub use style_spec::*;
pub use styled_text::*;
