//! Output filters applied between the strip buffer and the LED driver.
//!
//! Effects keep drawing into their own buffer; the filters write the
//! corrected copy into a separate output frame so trails that depend on the
//! previous buffer contents are never scaled twice.

use crate::color::Rgb;

mod brightness;
mod color_correction;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub use brightness::BrightnessFilter;
pub use color_correction::{ColorCorrection, TYPICAL_LED_STRIP, UNCORRECTED};

#[derive(Debug, Clone, Copy)]
pub struct FilterProcessorConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Per-channel color correction
    pub color_correction: Rgb,
}

/// Filter processor - applies post-processing to frames
///
/// Color correction runs first, global brightness last.
#[derive(Debug, Clone, Copy)]
pub struct FilterProcessor {
    pub brightness: BrightnessFilter,
    pub color_correction: ColorCorrection,
}

impl FilterProcessor {
    pub const fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness),
            color_correction: ColorCorrection::new(config.color_correction),
        }
    }

    /// Copy `source` into `output` and apply every filter to the copy
    ///
    /// Copies `min(source.len(), output.len())` entries.
    pub fn process(&self, source: &[Rgb], output: &mut [Rgb]) {
        let len = source.len().min(output.len());
        let output = &mut output[..len];
        output.copy_from_slice(&source[..len]);
        self.color_correction.apply(output);
        self.brightness.apply(output);
    }
}
