//! Dots sweeping back and forth along the strip

use super::PatternContext;
use crate::{
    color::{Rgb, fade_to_black_by, hsv, max_channels, saturating_add},
    math8::beatsin16,
};

const SINELON_FADE: u8 = 20;
const SINELON_BPM: u8 = 13;

const JUGGLE_FADE: u8 = 20;
const JUGGLE_DOTS: u8 = 8;
const JUGGLE_HUE_STEP: u8 = 32;

/// Index of the last LED as an oscillator bound
fn last_index(leds: &[Rgb]) -> u16 {
    u16::try_from(leds.len() - 1).unwrap_or(u16::MAX)
}

/// A colored dot sweeping back and forth, with fading trails
pub(crate) fn sinelon(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    fade_to_black_by(leds, SINELON_FADE);
    let pos = usize::from(beatsin16(SINELON_BPM, 0, last_index(leds), cx.now));
    leds[pos] = saturating_add(leds[pos], hsv(cx.hue, 255, 192));
}

/// Eight colored dots, weaving in and out of sync with each other
pub(crate) fn juggle(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    fade_to_black_by(leds, JUGGLE_FADE);
    let last = last_index(leds);
    let mut dot_hue: u8 = 0;
    for i in 0..JUGGLE_DOTS {
        let pos = usize::from(beatsin16(i + 7, 0, last, cx.now));
        leds[pos] = max_channels(leds[pos], hsv(dot_hue, 200, 255));
        dot_hue = dot_hue.wrapping_add(JUGGLE_HUE_STEP);
    }
}
