use super::PatternContext;
use crate::{
    color::{PARTY_COLORS, Rgb},
    math8::beatsin8,
};

const BEATS_PER_MINUTE: u8 = 62;

/// Colored stripes pulsing at a fixed beats-per-minute
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn bpm(leds: &mut [Rgb], cx: &mut PatternContext<'_>) {
    let beat = beatsin8(BEATS_PER_MINUTE, 64, 255, cx.now);
    for (i, led) in leds.iter_mut().enumerate() {
        let i = i as u8;
        let index = cx.hue.wrapping_add(i.wrapping_mul(2));
        let brightness = beat.wrapping_sub(cx.hue).wrapping_add(i.wrapping_mul(10));
        *led = PARTY_COLORS.color_at(index, brightness);
    }
}
