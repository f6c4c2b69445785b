//! 16-entry color palettes with linear blending between entries

use crate::{
    color::{Rgb, rgb_from_u32},
    math8::scale8,
};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        Palette16([
            $(rgb_from_u32($color)),*
        ])
    };
}

/// Party palette: purples, reds and oranges with no greens
#[allow(clippy::unreadable_literal)]
pub const PARTY_COLORS: Palette16 = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B,
    0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E,
    0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9
];

/// Sixteen evenly spaced colors covering the 0-255 index circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16(pub [Rgb; 16]);

impl Palette16 {
    /// Sample the palette at `index`, blending towards the next entry, and
    /// scale the result by `brightness`
    ///
    /// The last entry blends back into the first one.
    pub fn color_at(&self, index: u8, brightness: u8) -> Rgb {
        let entry = usize::from(index >> 4);
        let fraction = (index & 0x0F) << 4;

        let current = self.0[entry];
        let mut color = if fraction == 0 {
            current
        } else {
            let next = self.0[(entry + 1) % self.0.len()];
            let keep = 255 - fraction;
            Rgb {
                r: scale8(current.r, keep) + scale8(next.r, fraction),
                g: scale8(current.g, keep) + scale8(next.g, fraction),
                b: scale8(current.b, keep) + scale8(next.b, fraction),
            }
        };

        if brightness != 255 {
            color.r = scale8(color.r, brightness);
            color.g = scale8(color.g, brightness);
            color.b = scale8(color.b, brightness);
        }
        color
    }
}
