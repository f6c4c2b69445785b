mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::{PARTY_COLORS, Palette16};
pub use utils::{
    BLACK, WHITE, blend_colors, fade_to_black_by, fill_rainbow, fill_solid, hsv, hsv2rgb,
    max_channels, rgb_from_u32, saturating_add,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
