// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CSI, ColorSpec, EffectCode, PARAM_SEPARATOR, SGR};

pub mod sizing {
    use smallstr::SmallString;
    use smallvec::SmallVec;

    use crate::{ColorParam, EffectCode};

    /// A foreground and a background.
    pub const MAX_COLOR_PARAMS: usize = 2;
    pub type InlineVecColorParams = SmallVec<[ColorParam; MAX_COLOR_PARAMS]>;

    /// Effects are: bold, faint, italic, underline, blink, inverse, conceal, etc. which
    /// are in [`crate::sgr_codes`].
    pub const MAX_EFFECTS: usize = 8;
    pub type InlineVecEffects = SmallVec<[EffectCode; MAX_EFFECTS]>;

    /// Fits `ESC[38;2;255;255;255;1m` without spilling to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 24;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

/// A complete escape sequence, eg: `ESC[31;1m`. Built fresh on every call.
pub type EscapeSequence = sizing::InlineString;

/// The complete rendering state to apply: a color (possibly combined) plus an ordered
/// list of effects.
///
/// Its [`Display`] output is the escape sequence: CSI, then the color parameters, then
/// each effect in the order given, joined with `;`, then `m`. Effects are passed through
/// as is: no range check, no dedup, no reordering. If two effects conflict (eg:
/// [`crate::SLOW_BLINK`] and [`crate::RAPID_BLINK`]) the terminal decides.
///
/// The [`Default`] is [`crate::DEFAULT`] with no effects, ie: `ESC[0m`.
///
/// ```
/// use r3bl_color_text::{BOLD, RED, StyleSpec, UNDERLINE};
///
/// let style = StyleSpec::new(RED).effect(BOLD).effect(UNDERLINE);
/// assert_eq!(style.to_string(), "\x1b[31;1;4m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    pub color: ColorSpec,
    pub effects: sizing::InlineVecEffects,
}

impl StyleSpec {
    #[must_use]
    pub fn new(color: impl Into<ColorSpec>) -> Self {
        Self {
            color: color.into(),
            effects: sizing::InlineVecEffects::new(),
        }
    }

    #[must_use]
    pub fn effect(mut self, code: EffectCode) -> Self {
        self.effects.push(code);
        self
    }

    #[must_use]
    pub fn effects(mut self, codes: impl IntoIterator<Item = EffectCode>) -> Self {
        self.effects.extend(codes);
        self
    }

    /// Writes the [Display] output straight into an inline buffer on the stack, without
    /// going through a [String]. If the sequence is longer than
    /// [`sizing::DEFAULT_STRING_STORAGE_SIZE`], the buffer spills to the heap.
    #[must_use]
    pub fn to_escape_sequence(&self) -> EscapeSequence {
        use std::fmt::Write as _;
        let mut acc = EscapeSequence::new();
        // Writing to a SmallString never fails.
        _ = write!(acc, "{self}");
        acc
    }
}

impl Display for StyleSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}{}", self.color)?;
        for effect in &self.effects {
            write!(f, "{PARAM_SEPARATOR}{effect}")?;
        }
        write!(f, "{SGR}")
    }
}

/// Build the escape sequence for `color` followed by `effects`. Pass
/// [`crate::DEFAULT`] and an empty slice to get the reset sequence.
///
/// Effect codes are not checked against the table, any [`EffectCode`] (`0..=255`) is
/// written as is. SGR defines no parameter above `107`, so nothing wider is accepted.
/// A bare integer literal for `color` defaults to `i32`, which does not convert, so
/// use a table constant or a `u8` suffix:
///
/// ```
/// use r3bl_color_text::{BOLD, DEFAULT, build_sequence};
///
/// assert_eq!(build_sequence(DEFAULT, &[BOLD]).as_str(), "\x1b[0;1m");
/// assert_eq!(build_sequence(0_u8, &[BOLD, 255]).as_str(), "\x1b[0;1;255m");
/// ```
#[must_use]
pub fn build_sequence(
    color: impl Into<ColorSpec>,
    effects: &[EffectCode],
) -> EscapeSequence {
    StyleSpec::new(color)
        .effects(effects.iter().copied())
        .to_escape_sequence()
}

/// `ESC[0m`, which restores the default color and clears every effect.
#[must_use]
pub fn reset_sequence() -> EscapeSequence { StyleSpec::default().to_escape_sequence() }

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;
    use crate::{BACKGROUND, BG_WHITE, BOLD, ColorTarget, DEFAULT, FOREGROUND, RAPID_BLINK,
                RED, SLOW_BLINK, UNDERLINE, combine, encode_palette_8bit, encode_rgb};

    #[test]
    fn color_then_effect() {
        assert_eq!(build_sequence(RED, &[BOLD]).as_str(), "\x1b[31;1m");
    }

    #[test]
    fn default_without_effects_is_reset() {
        assert_eq!(build_sequence(DEFAULT, &[]).as_str(), "\x1b[0m");
        assert_eq!(reset_sequence().as_str(), "\x1b[0m");
        assert_eq!(StyleSpec::default().to_string(), "\x1b[0m");
    }

    #[test]
    fn reset_twice_is_two_identical_sequences() {
        let first = build_sequence(DEFAULT, &[]);
        let second = build_sequence(DEFAULT, &[]);
        assert_eq!(first, second);
        assert_eq!(format!("{first}{second}"), "\x1b[0m\x1b[0m");
    }

    #[test]
    fn effect_order_is_preserved() {
        let bold_first = build_sequence(DEFAULT, &[BOLD, UNDERLINE]);
        let underline_first = build_sequence(DEFAULT, &[UNDERLINE, BOLD]);
        assert_eq!(bold_first.as_str(), "\x1b[0;1;4m");
        assert_eq!(underline_first.as_str(), "\x1b[0;4;1m");
        assert_ne!(bold_first, underline_first);
    }

    #[test]
    fn no_dedup_and_no_conflict_detection() {
        assert_eq!(
            build_sequence(DEFAULT, &[BOLD, BOLD, SLOW_BLINK, RAPID_BLINK]).as_str(),
            "\x1b[0;1;1;5;6m"
        );
    }

    #[test]
    fn unknown_effect_codes_pass_through() {
        assert_eq!(build_sequence(RED, &[200, 99]).as_str(), "\x1b[31;200;99m");
    }

    #[test]
    fn combined_color_spec() {
        let fg = encode_palette_8bit(5, FOREGROUND).unwrap();
        let bg = encode_palette_8bit(9, BACKGROUND).unwrap();
        assert_eq!(
            build_sequence(combine(fg, bg), &[BOLD]).as_str(),
            "\x1b[38;5;5;48;5;9;1m"
        );
    }

    #[test]
    fn rgb_color_spec() {
        let fg = encode_rgb(175, 215, 135, ColorTarget::Foreground).unwrap();
        assert_eq!(
            build_sequence(&fg, &[UNDERLINE]).as_str(),
            "\x1b[38;2;175;215;135;4m"
        );
        assert_eq!(build_sequence(fg, &[]).as_str(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn builder() {
        let style = StyleSpec::new(combine(RED.into(), BG_WHITE.into()))
            .effect(BOLD)
            .effects([UNDERLINE, SLOW_BLINK]);
        assert_eq!(style.to_escape_sequence().as_str(), "\x1b[31;47;1;4;5m");
    }

    #[test]
    fn short_sequence_stays_inline() {
        let sequence = StyleSpec::new(ColorSpec::rgb(ColorTarget::Foreground, 255, 255, 255))
            .effect(BOLD)
            .to_escape_sequence();
        assert!(!sequence.spilled());
        assert_eq!(sequence.as_str(), "\x1b[38;2;255;255;255;1m");
    }

    #[test]
    fn suffixed_literals_and_the_full_effect_range() {
        let bold_first = build_sequence(0_u8, &[BOLD, UNDERLINE]);
        let underline_first = build_sequence(0_u8, &[UNDERLINE, BOLD]);
        assert_ne!(bold_first, underline_first);
        assert_eq!(
            build_sequence(0_u8, &[EffectCode::MIN, EffectCode::MAX]).as_str(),
            "\x1b[0;0;255m"
        );
    }

    #[test]
    fn long_sequence_spills_to_heap() {
        let fg = ColorSpec::rgb(ColorTarget::Foreground, 255, 255, 255);
        let bg = ColorSpec::rgb(ColorTarget::Background, 255, 255, 255);
        let sequence = build_sequence(combine(fg, bg), &[BOLD, UNDERLINE]);
        assert!(sequence.spilled());
        assert_eq!(
            sequence.as_str(),
            "\x1b[38;2;255;255;255;48;2;255;255;255;1;4m"
        );
    }
}
