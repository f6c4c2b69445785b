use rand::Rng;

use super::PatternContext;
use crate::color::{Rgb, fade_to_black_by, hsv, saturating_add};

const FADE: u8 = 10;
const HUE_SPREAD: u8 = 64;

/// Random colored speckles that blink in and fade smoothly
pub(crate) fn confetti(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    fade_to_black_by(leds, FADE);
    let pos = cx.rng.gen_range(0..leds.len());
    let hue = cx.hue.wrapping_add(cx.rng.gen_range(0..HUE_SPREAD));
    leds[pos] = saturating_add(leds[pos], hsv(hue, 200, 255));
}
