//! Strip pattern engine
//!
//! Owns the LED buffer and runs one pattern step per tick. Two interval
//! timers run alongside: a fast one that rotates the shared base hue and a
//! slow one that moves on to the next pattern.

mod bpm;
mod confetti;
mod pattern;
mod rainbow;
mod sweep;

use embassy_time::{Duration, Instant};
use rand::{SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use pattern::{PatternContext, StripPatternId};

use crate::clock::IntervalTimer;
use crate::color::{BLACK, Rgb, fill_solid};
use crate::filter::{FilterProcessorConfig, TYPICAL_LED_STRIP};

/// Default interval between pattern switches
pub const DEFAULT_PATTERN_INTERVAL: Duration = Duration::from_secs(10);

/// Default interval between base hue increments
pub const DEFAULT_HUE_INTERVAL: Duration = Duration::from_millis(20);

/// Default global strip brightness
pub const DEFAULT_BRIGHTNESS: u8 = 96;

/// Configuration for the strip engine
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Seed for the random source used by glitter and confetti
    pub seed: u64,
    /// Pattern shown first
    pub pattern: StripPatternId,
    pub pattern_interval: Duration,
    pub hue_interval: Duration,
    /// Global output brightness (0-255)
    pub brightness: u8,
    /// Per-channel output correction
    pub color_correction: Rgb,
}

impl StripConfig {
    /// Output filter settings
    pub const fn filters(&self) -> FilterProcessorConfig {
        FilterProcessorConfig {
            brightness: self.brightness,
            color_correction: self.color_correction,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pattern: StripPatternId::default(),
            pattern_interval: DEFAULT_PATTERN_INTERVAL,
            hue_interval: DEFAULT_HUE_INTERVAL,
            brightness: DEFAULT_BRIGHTNESS,
            color_correction: TYPICAL_LED_STRIP,
        }
    }
}

pub struct StripEngine<const LEDS: usize> {
    leds: [Rgb; LEDS],
    hue: u8,
    pattern: StripPatternId,
    rng: SmallRng,
    pattern_timer: IntervalTimer,
    hue_timer: IntervalTimer,
}

impl<const LEDS: usize> StripEngine<LEDS> {
    /// Create an engine whose timers start counting at `start`
    pub fn new(config: &StripConfig, start: Instant) -> Self {
        Self {
            leds: [BLACK; LEDS],
            hue: 0,
            pattern: config.pattern,
            rng: SmallRng::seed_from_u64(config.seed),
            pattern_timer: IntervalTimer::new(config.pattern_interval, start),
            hue_timer: IntervalTimer::new(config.hue_interval, start),
        }
    }

    /// Run the current pattern once, then service the hue and rotation timers
    pub fn tick(&mut self, now: Instant) {
        let mut cx = PatternContext {
            hue: self.hue,
            now,
            rng: &mut self.rng,
        };
        self.pattern.render(&mut self.leds, &mut cx);

        if self.hue_timer.ready(now) {
            self.hue = self.hue.wrapping_add(1);
        }
        if self.pattern_timer.ready(now) {
            self.next_pattern();
        }
    }

    /// Advance to the next pattern, wrapping around at the end
    pub fn next_pattern(&mut self) {
        self.pattern = self.pattern.next();
        #[cfg(feature = "esp32-log")]
        println!("[StripEngine.next_pattern] switching to {}", self.pattern.as_str());
    }

    /// Switch to `pattern` and restart its rotation period at `now`
    pub fn set_pattern(&mut self, pattern: StripPatternId, now: Instant) {
        self.pattern = pattern;
        self.pattern_timer.reset(now);
    }

    /// Overwrite the whole buffer with one color
    pub fn fill_solid(&mut self, color: Rgb) {
        fill_solid(&mut self.leds, color);
    }

    pub const fn leds(&self) -> &[Rgb; LEDS] {
        &self.leds
    }

    pub const fn leds_mut(&mut self) -> &mut [Rgb; LEDS] {
        &mut self.leds
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn pattern(&self) -> StripPatternId {
        self.pattern
    }
}
