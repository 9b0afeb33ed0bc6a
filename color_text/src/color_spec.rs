// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color parameters for an SGR escape sequence.
//!
//! The terminal protocol multiplexes three color spaces:
//! - 4-bit colors are fixed codes, eg: [`crate::RED`] (`31`) or [`crate::BG_BLUE`]
//!   (`44`). They are table constants and convert straight into a [`ColorSpec`].
//! - 8-bit palette colors: `<target>;5;<index>`.
//! - 24-bit RGB colors: `<target>;2;<r>;<g>;<b>`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use std::fmt::{Display, Formatter, Result};

use smallvec::smallvec;
use strum_macros::{EnumCount, EnumIter};

use crate::{BACKGROUND, BG_BLACK, BG_WHITE, BLACK, DEFAULT, DEFAULT_BACKGROUND,
            DEFAULT_FOREGROUND, EffectCode, FOREGROUND, InvalidArgument, MODE_ANSI256,
            MODE_RGB, PARAM_SEPARATOR, VALID_COLOR_VALUE_RANGE, WHITE, sizing};

/// Which terminal layer an 8-bit or 24-bit color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum ColorTarget {
    Foreground,
    Background,
}

impl ColorTarget {
    /// [`FOREGROUND`] (`38`) or [`BACKGROUND`] (`48`).
    #[must_use]
    pub const fn code(self) -> EffectCode {
        match self {
            ColorTarget::Foreground => FOREGROUND,
            ColorTarget::Background => BACKGROUND,
        }
    }

    /// The code that resets only this layer: [`DEFAULT_FOREGROUND`] (`39`) or
    /// [`DEFAULT_BACKGROUND`] (`49`).
    #[must_use]
    pub const fn default_code(self) -> EffectCode {
        match self {
            ColorTarget::Foreground => DEFAULT_FOREGROUND,
            ColorTarget::Background => DEFAULT_BACKGROUND,
        }
    }
}

impl TryFrom<EffectCode> for ColorTarget {
    type Error = InvalidArgument;

    fn try_from(value: EffectCode) -> std::result::Result<Self, Self::Error> {
        match value {
            FOREGROUND => Ok(ColorTarget::Foreground),
            BACKGROUND => Ok(ColorTarget::Background),
            _ => {
                tracing::debug!(received = value, "Rejected color target");
                Err(InvalidArgument::Target { received: value })
            }
        }
    }
}

/// One color parameter. A [`ColorSpec`] holds one of these, or two when a foreground
/// and a background are [`combine`]d.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorParam {
    /// A code that needs no arguments: a 4-bit color, a layer reset, or [`DEFAULT`].
    Fixed(EffectCode),
    Ansi256 {
        target: ColorTarget,
        index: u8,
    },
    Rgb {
        target: ColorTarget,
        red: u8,
        green: u8,
        blue: u8,
    },
}

impl ColorParam {
    /// The same color, drawn on `layer`. 4-bit colors `30..=37` and `40..=47` and the
    /// layer resets `39` / `49` move to the matching code on `layer`, 8-bit and 24-bit
    /// colors take `layer` as their target. Any other fixed code (eg: [`DEFAULT`]) is
    /// returned as is.
    #[must_use]
    #[rustfmt::skip]
    pub const fn on_layer(self, layer: ColorTarget) -> Self {
        match (self, layer) {
            (
                ColorParam::Fixed(code @ (BLACK..=WHITE | DEFAULT_FOREGROUND)),
                ColorTarget::Background,
            ) => ColorParam::Fixed(code + LAYER_OFFSET),
            (
                ColorParam::Fixed(code @ (BG_BLACK..=BG_WHITE | DEFAULT_BACKGROUND)),
                ColorTarget::Foreground,
            ) => ColorParam::Fixed(code - LAYER_OFFSET),
            (ColorParam::Fixed(_), _) => self,
            (ColorParam::Ansi256 { index, .. }, target) => {
                ColorParam::Ansi256 { target, index }
            }
            (ColorParam::Rgb { red, green, blue, .. }, target) => {
                ColorParam::Rgb { target, red, green, blue }
            }
        }
    }
}

/// Distance between a 4-bit foreground code and its background code.
const LAYER_OFFSET: EffectCode = BG_BLACK - BLACK;

impl Display for ColorParam {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            ColorParam::Fixed(code) => write!(f, "{code}"),
            ColorParam::Ansi256 { target, index } => {
                write!(f, "{};{MODE_ANSI256};{index}", target.code())
            }
            ColorParam::Rgb { target, red, green, blue } => {
                write!(f, "{};{MODE_RGB};{red};{green};{blue}", target.code())
            }
        }
    }
}

/// The color part of an escape sequence. Its [`Display`] output is the parameter
/// string, eg: `38;5;150` or `38;2;0;128;255;48;5;236`.
///
/// Never empty. The [`Default`] is [`DEFAULT`] (`0`), which resets everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorSpec {
    params: sizing::InlineVecColorParams,
}

/// A foreground [`ColorSpec`] joined with a background [`ColorSpec`]. It is the same
/// type, so it can be used anywhere a single spec can.
pub type CombinedColorSpec = ColorSpec;

impl ColorSpec {
    #[must_use]
    pub fn fixed(code: EffectCode) -> Self { ColorParam::Fixed(code).into() }

    /// Infallible version of [`encode_palette_8bit`] for an index that is already a
    /// [`u8`].
    #[must_use]
    pub fn ansi256(target: ColorTarget, index: u8) -> Self {
        ColorParam::Ansi256 { target, index }.into()
    }

    /// Infallible version of [`encode_rgb`] for channels that are already [`u8`]s.
    #[must_use]
    pub fn rgb(target: ColorTarget, red: u8, green: u8, blue: u8) -> Self {
        ColorParam::Rgb {
            target,
            red,
            green,
            blue,
        }
        .into()
    }

    #[must_use]
    pub fn params(&self) -> &[ColorParam] { &self.params }

    /// Move every parameter onto `layer`. See [`ColorParam::on_layer()`].
    ///
    /// ```
    /// use r3bl_color_text::{BG_RED, ColorSpec, ColorTarget, RED};
    ///
    /// assert_eq!(
    ///     ColorSpec::from(RED).on_layer(ColorTarget::Background),
    ///     ColorSpec::from(BG_RED)
    /// );
    /// assert_eq!(
    ///     ColorSpec::ansi256(ColorTarget::Foreground, 9)
    ///         .on_layer(ColorTarget::Background)
    ///         .to_string(),
    ///     "48;5;9"
    /// );
    /// ```
    #[must_use]
    pub fn on_layer(mut self, layer: ColorTarget) -> Self {
        for param in &mut self.params {
            *param = param.on_layer(layer);
        }
        self
    }
}

impl Default for ColorSpec {
    fn default() -> Self { Self::fixed(DEFAULT) }
}

impl From<ColorParam> for ColorSpec {
    fn from(param: ColorParam) -> Self {
        Self {
            params: smallvec![param],
        }
    }
}

/// Lets table constants like [`crate::RED`] or [`DEFAULT`] be used as a color.
impl From<EffectCode> for ColorSpec {
    fn from(code: EffectCode) -> Self { Self::fixed(code) }
}

impl From<&ColorSpec> for ColorSpec {
    fn from(spec: &ColorSpec) -> Self { spec.clone() }
}

impl Display for ColorSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, "{PARAM_SEPARATOR}")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

/// Encode an 8-bit palette color for `target`. Displays as `<target>;5;<color_value>`.
///
/// `target` is either a [`ColorTarget`] or a raw code, eg: [`FOREGROUND`].
///
/// # Errors
///
/// [`InvalidArgument::Target`] if `target` is a raw code other than [`FOREGROUND`] or
/// [`BACKGROUND`], or [`InvalidArgument::PaletteIndex`] if `color_value` is not in
/// [`VALID_COLOR_VALUE_RANGE`].
pub fn encode_palette_8bit<T>(
    color_value: i64,
    target: T,
) -> std::result::Result<ColorSpec, InvalidArgument>
where
    T: TryInto<ColorTarget>,
    InvalidArgument: From<T::Error>,
{
    let target = target.try_into()?;
    let Ok(index) = u8::try_from(color_value) else {
        tracing::debug!(received = color_value, "Rejected palette index");
        return Err(InvalidArgument::PaletteIndex {
            received: color_value,
            valid_range: VALID_COLOR_VALUE_RANGE,
        });
    };
    Ok(ColorSpec::ansi256(target, index))
}

/// Encode a 24-bit RGB color for `target`. Displays as `<target>;2;<r>;<g>;<b>`.
///
/// # Errors
///
/// [`InvalidArgument::Target`] for a bad raw target code, or
/// [`InvalidArgument::RgbChannels`] (carrying all three supplied values) if any channel
/// is not in [`VALID_COLOR_VALUE_RANGE`].
pub fn encode_rgb<T>(
    red: i64,
    green: i64,
    blue: i64,
    target: T,
) -> std::result::Result<ColorSpec, InvalidArgument>
where
    T: TryInto<ColorTarget>,
    InvalidArgument: From<T::Error>,
{
    let target = target.try_into()?;
    let (Ok(r), Ok(g), Ok(b)) =
        (u8::try_from(red), u8::try_from(green), u8::try_from(blue))
    else {
        tracing::debug!(red, green, blue, "Rejected RGB channels");
        return Err(InvalidArgument::RgbChannels {
            red,
            green,
            blue,
            valid_range: VALID_COLOR_VALUE_RANGE,
        });
    };
    Ok(ColorSpec::rgb(target, r, g, b))
}

/// Join a foreground and a background spec so both are applied by one escape sequence.
///
/// The targets are not checked. Passing two foreground specs is accepted, and the
/// terminal will apply the last one.
#[must_use]
pub fn combine(foreground: ColorSpec, background: ColorSpec) -> CombinedColorSpec {
    let mut params = foreground.params;
    params.extend(background.params);
    ColorSpec { params }
}
