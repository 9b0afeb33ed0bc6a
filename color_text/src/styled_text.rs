// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ColorSpec, ColorTarget, EffectCode, StyleSpec, combine};

/// Text plus the [`StyleSpec`] to render it with. Displaying it writes the style's
/// escape sequence, the text, then `ESC[0m`. The reset is always written, regardless of
/// what styling was requested, so nothing leaks into text printed afterwards.
///
/// Nothing is allocated until it is displayed.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_color_text::*;
///
/// // Using a table constant for the color.
/// let warning = StyledText::new("careful").fg(YELLOW).effect(BOLD);
/// assert_eq!(warning.to_string(), "\x1b[33;1mcareful\x1b[0m");
///
/// // Combine a foreground with a background.
/// let fg = encode_rgb(0, 128, 255, FOREGROUND).unwrap();
/// let status = StyledText::new("ok").fg(fg).bg(ColorSpec::ansi256(ColorTarget::Background, 236));
/// assert_eq!(status.to_string(), "\x1b[38;2;0;128;255;48;5;236mok\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: StyleSpec,
}

impl<'a> StyledText<'a> {
    /// Starts out with the default color and no effects.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: StyleSpec::default(),
        }
    }

    #[must_use]
    pub fn with_style(text: &'a str, style: StyleSpec) -> Self { Self { text, style } }
}

impl StyledText<'_> {
    /// Add `color` as the foreground. A background code (eg: [`crate::BG_RED`]) or an
    /// 8-bit / 24-bit color aimed at the background is moved to the foreground.
    #[must_use]
    pub fn fg(self, color: impl Into<ColorSpec>) -> Self {
        let color: ColorSpec = color.into();
        self.add_color(color.on_layer(ColorTarget::Foreground))
    }

    /// Add `color` as the background, so `bg(RED)` is the same as `bg(BG_RED)`.
    #[must_use]
    pub fn bg(self, color: impl Into<ColorSpec>) -> Self {
        let color: ColorSpec = color.into();
        self.add_color(color.on_layer(ColorTarget::Background))
    }

    #[must_use]
    pub fn effect(mut self, code: EffectCode) -> Self {
        self.style.effects.push(code);
        self
    }

    /// The first color replaces [`crate::DEFAULT`], later ones are joined after it.
    fn add_color(mut self, color: ColorSpec) -> Self {
        self.style.color = if self.style.color == ColorSpec::default() {
            color
        } else {
            combine(self.style.color, color)
        };
        self
    }
}

impl Display for StyledText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.style)?;
        write!(f, "{}", self.text)?;
        write!(f, "{}", StyleSpec::default())
    }
}

/// Surround `text` with the escape sequence for `color` and `effects`, and a full reset.
///
/// ```
/// use r3bl_color_text::{BOLD, RED, wrap};
///
/// assert_eq!(wrap("hi", RED, &[BOLD]), "\x1b[31;1mhi\x1b[0m");
/// ```
#[must_use]
pub fn wrap(text: &str, color: impl Into<ColorSpec>, effects: &[EffectCode]) -> String {
    let style = StyleSpec::new(color).effects(effects.iter().copied());
    StyledText::with_style(text, style).to_string()
}
