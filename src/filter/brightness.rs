//! Global brightness control of the strip output

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{color::Rgb, math8::scale8};

/// Scales every channel by a global brightness (255 = unchanged)
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    value: u8,
}

impl BrightnessFilter {
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Set the brightness; the value is used verbatim
    pub fn set(&mut self, value: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessFilter.set] brightness {} -> {}", self.value, value);
        self.value = value;
    }

    pub const fn get(&self) -> u8 {
        self.value
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        match self.value {
            255 => {}
            0 => {
                for pixel in frame.iter_mut() {
                    *pixel = Rgb { r: 0, g: 0, b: 0 };
                }
            }
            value => {
                for pixel in frame.iter_mut() {
                    pixel.r = scale8(pixel.r, value);
                    pixel.g = scale8(pixel.g, value);
                    pixel.b = scale8(pixel.b, value);
                }
            }
        }
    }
}
