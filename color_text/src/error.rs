// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{convert::Infallible, ops::RangeInclusive};

use crate::EffectCode;

/// Inclusive range for an 8-bit palette index and for each 24-bit RGB channel.
pub const VALID_COLOR_VALUE_RANGE: RangeInclusive<i64> = 0..=255;

/// Errors from the color encoders, eg: [`crate::encode_palette_8bit()`] and
/// [`crate::encode_rgb()`].
///
/// Each variant carries the offending value(s) and, where it applies, the valid range.
/// Values are never clamped.
///
/// | Variant          | Cause                                                  |
/// | :--------------- | :----------------------------------------------------- |
/// | [`Target`]       | Target code is neither [`crate::FOREGROUND`] nor [`crate::BACKGROUND`] |
/// | [`PaletteIndex`] | 8-bit palette index outside [`VALID_COLOR_VALUE_RANGE`]  |
/// | [`RgbChannels`]  | One or more RGB channels outside the same range          |
///
/// [`Target`]: Self::Target
/// [`PaletteIndex`]: Self::PaletteIndex
/// [`RgbChannels`]: Self::RgbChannels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InvalidArgument {
    #[error("Target must be FOREGROUND (38) or BACKGROUND (48), received {received}")]
    #[diagnostic(
        code(r3bl_color_text::invalid_argument::target),
        help("Use `ColorTarget::Foreground` or `ColorTarget::Background`")
    )]
    Target { received: EffectCode },

    #[error("Palette index must be in {valid_range:?} (inclusive), received {received}")]
    #[diagnostic(
        code(r3bl_color_text::invalid_argument::palette_index),
        help("The 8-bit palette has 256 entries, indexed from 0")
    )]
    PaletteIndex {
        received: i64,
        valid_range: RangeInclusive<i64>,
    },

    /// All three channels are reported, even if only one of them is out of range.
    #[error(
        "RGB channels must be in {valid_range:?} (inclusive), received red = {red}, green = {green}, blue = {blue}"
    )]
    #[diagnostic(code(r3bl_color_text::invalid_argument::rgb_channels))]
    RgbChannels {
        red: i64,
        green: i64,
        blue: i64,
        valid_range: RangeInclusive<i64>,
    },
}

/// Lets the encoders take an already typed [`crate::ColorTarget`], whose conversion
/// can't fail, through the same generic parameter as a raw target code.
impl From<Infallible> for InvalidArgument {
    fn from(it: Infallible) -> Self { match it {} }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn target_message() {
        let it = InvalidArgument::Target { received: 37 };
        assert_eq!(
            it.to_string(),
            "Target must be FOREGROUND (38) or BACKGROUND (48), received 37"
        );
    }

    #[test]
    fn palette_index_message() {
        let it = InvalidArgument::PaletteIndex {
            received: 256,
            valid_range: VALID_COLOR_VALUE_RANGE,
        };
        assert_eq!(
            it.to_string(),
            "Palette index must be in 0..=255 (inclusive), received 256"
        );
    }

    #[test]
    fn rgb_channels_message_reports_every_channel() {
        let it = InvalidArgument::RgbChannels {
            red: -1,
            green: 10,
            blue: 300,
            valid_range: VALID_COLOR_VALUE_RANGE,
        };
        assert_eq!(
            it.to_string(),
            "RGB channels must be in 0..=255 (inclusive), received red = -1, green = 10, blue = 300"
        );
    }

    #[test]
    fn has_diagnostic_code() {
        use miette::Diagnostic;
        let it = InvalidArgument::Target { received: 0 };
        let code = it.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_color_text::invalid_argument::target")
        );
    }
}
