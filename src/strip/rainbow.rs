use rand::Rng;

use super::PatternContext;
use crate::color::{Rgb, WHITE, fill_rainbow, saturating_add};

const HUE_STEP: u8 = 7;
const GLITTER_CHANCE: u8 = 80;

/// Rainbow starting at the rotating hue
pub(crate) fn rainbow(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    fill_rainbow(leds, cx.hue, HUE_STEP);
}

/// Rainbow with an occasional white spark on a random LED
pub(crate) fn rainbow_with_glitter(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    rainbow(leds, cx);
    if cx.rng.r#gen::<u8>() < GLITTER_CHANCE {
        let pos = cx.rng.gen_range(0..leds.len());
        leds[pos] = saturating_add(leds[pos], WHITE);
    }
}
