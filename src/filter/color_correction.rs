//! Color correction filter
//!
//! Applies multiplicative color correction to each RGB channel to balance
//! the uneven channel brightness of typical WS2812 strips.

use super::Filter;
use crate::color::{Rgb, rgb_from_u32};
use crate::math8::scale8;

/// Correction for a typical SMD5050 strip (full red, dimmer green and blue)
#[allow(clippy::unreadable_literal)]
pub const TYPICAL_LED_STRIP: Rgb = rgb_from_u32(0xFFB0F0);

/// No correction at all
pub const UNCORRECTED: Rgb = rgb_from_u32(0xFF_FF_FF);

#[derive(Debug, Clone, Copy)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl ColorCorrection {
    pub const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    /// Check if correction is active
    pub const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.factors.r);
            pixel.g = scale8(pixel.g, self.factors.g);
            pixel.b = scale8(pixel.b, self.factors.b);
        }
    }
}
