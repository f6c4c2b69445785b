//! Strip pattern ids and dispatch
//!
//! Patterns are stateless: each one is a function of the LED buffer, the
//! rotating hue, the current time and the engine's random source.

use embassy_time::Instant;
use rand::rngs::SmallRng;

use super::{bpm, confetti, rainbow, sweep};
use crate::color::Rgb;

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_RAINBOW_WITH_GLITTER: &str = "rainbow_with_glitter";
const PATTERN_NAME_CONFETTI: &str = "confetti";
const PATTERN_NAME_SINELON: &str = "sinelon";
const PATTERN_NAME_JUGGLE: &str = "juggle";
const PATTERN_NAME_BPM: &str = "bpm";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_RAINBOW_WITH_GLITTER: u8 = 1;
const PATTERN_ID_CONFETTI: u8 = 2;
const PATTERN_ID_SINELON: u8 = 3;
const PATTERN_ID_JUGGLE: u8 = 4;
const PATTERN_ID_BPM: u8 = 5;

/// Everything a pattern may read while drawing one frame
pub struct PatternContext<'a> {
    /// Slowly rotating base hue, shared by all patterns within a tick
    pub hue: u8,
    pub now: Instant,
    pub rng: &'a mut SmallRng,
}

/// Strip patterns in rotation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum StripPatternId {
    #[default]
    Rainbow = PATTERN_ID_RAINBOW,
    RainbowWithGlitter = PATTERN_ID_RAINBOW_WITH_GLITTER,
    Confetti = PATTERN_ID_CONFETTI,
    Sinelon = PATTERN_ID_SINELON,
    Juggle = PATTERN_ID_JUGGLE,
    Bpm = PATTERN_ID_BPM,
}

impl StripPatternId {
    /// Number of patterns in the rotation
    pub const COUNT: u8 = 6;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_RAINBOW_WITH_GLITTER => Self::RainbowWithGlitter,
            PATTERN_ID_CONFETTI => Self::Confetti,
            PATTERN_ID_SINELON => Self::Sinelon,
            PATTERN_ID_JUGGLE => Self::Juggle,
            PATTERN_ID_BPM => Self::Bpm,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::RainbowWithGlitter => PATTERN_NAME_RAINBOW_WITH_GLITTER,
            Self::Confetti => PATTERN_NAME_CONFETTI,
            Self::Sinelon => PATTERN_NAME_SINELON,
            Self::Juggle => PATTERN_NAME_JUGGLE,
            Self::Bpm => PATTERN_NAME_BPM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_RAINBOW_WITH_GLITTER => Some(Self::RainbowWithGlitter),
            PATTERN_NAME_CONFETTI => Some(Self::Confetti),
            PATTERN_NAME_SINELON => Some(Self::Sinelon),
            PATTERN_NAME_JUGGLE => Some(Self::Juggle),
            PATTERN_NAME_BPM => Some(Self::Bpm),
            _ => None,
        }
    }

    /// The next pattern in rotation, wrapping back to the first
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % Self::COUNT).unwrap_or_default()
    }

    /// Draw one frame of this pattern into `leds`
    pub fn render(self, leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
        if leds.is_empty() {
            return;
        }
        match self {
            Self::Rainbow => rainbow::rainbow(leds, cx),
            Self::RainbowWithGlitter => rainbow::rainbow_with_glitter(leds, cx),
            Self::Confetti => confetti::confetti(leds, cx),
            Self::Sinelon => sweep::sinelon(leds, cx),
            Self::Juggle => sweep::juggle(leds, cx),
            Self::Bpm => bpm::bpm(leds, cx),
        }
    }
}
