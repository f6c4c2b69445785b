//! 8- and 16-bit fixed-point helpers in the spirit of `FastLED`'s `lib8tion`.
//!
//! Everything here is integer math except the sine tables, which are computed
//! with `libm` instead of being stored.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Sine of a 16-bit angle (0-65535 = one full turn), in -32767..=32767
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn sin16(theta: u16) -> i16 {
    let radians = f32::from(theta) * (TAU / 65536.0);
    (libm::sinf(radians) * 32767.0) as i16
}

/// Sine of an 8-bit angle (0-255 = one full turn), shifted into 0..=255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let radians = f32::from(theta) * (TAU / 256.0);
    let value = libm::sinf(radians) * 127.5 + 127.5;
    value.clamp(0.0, 255.0) as u8
}

/// Sawtooth that completes `bpm88 / 256` cycles per minute (Q8.8 beats)
#[allow(clippy::cast_possible_truncation)]
pub fn beat88(bpm88: u16, now: Instant) -> u16 {
    (now.as_millis()
        .wrapping_mul(u64::from(bpm88))
        .wrapping_mul(280)
        >> 16) as u16
}

/// 16-bit sawtooth at `bpm` beats per minute
pub fn beat16(bpm: u8, now: Instant) -> u16 {
    beat88(u16::from(bpm) << 8, now)
}

/// 8-bit sawtooth at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u8, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` (inclusive) at `bpm`
///
/// The result never leaves `[low, high]`, which makes it safe to use as an
/// index into a buffer of `high + 1` elements.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn beatsin16(bpm: u8, low: u16, high: u16, now: Instant) -> u16 {
    let (low, high) = if high < low { (high, low) } else { (low, high) };
    let beat = beat16(bpm, now);
    let wave = (i32::from(sin16(beat)) + 32768) as u16;
    low + scale16(wave, high - low)
}

/// 8-bit variant of [`beatsin16`]
pub fn beatsin8(bpm: u8, low: u8, high: u8, now: Instant) -> u8 {
    let (low, high) = if high < low { (high, low) } else { (low, high) };
    let wave = sin8(beat8(bpm, now));
    low + scale8(wave, high - low)
}
