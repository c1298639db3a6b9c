//! Color types and the per-pixel dimming math.
//!
//! Uses const integer math throughout; all conversions are branch-free and
//! cheap enough for the per-pixel render loop.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Convert a user-facing luminosity percent (0-100) into the device-facing
/// brightness scalar (0-255), rounding to nearest.
///
/// Inputs above 100 are treated as 100.
pub const fn luminosity_to_brightness(percent: u8) -> u8 {
    let p = if percent > 100 { 100 } else { percent };
    ((p as u16 * 255 + 50) / 100) as u8
}

/// Scale a color by a luminosity percent (0-100).
///
/// Each 8-bit channel is multiplied by the brightness scalar and truncated
/// with `>> 8`. This is a plain multiplicative dim, not gamma corrected,
/// and the truncation means `blend(c, 100)` can undershoot `c` by one per
/// channel. The exact rounding is load-bearing: reimplementing it changes
/// visible output.
pub const fn blend(color: Rgb, luminosity: u8) -> Rgb {
    let brightness = luminosity_to_brightness(luminosity) as u16;
    Rgb {
        r: ((color.r as u16 * brightness) >> 8) as u8,
        g: ((color.g as u16 * brightness) >> 8) as u8,
        b: ((color.b as u16 * brightness) >> 8) as u8,
    }
}

/// Build a color from a packed `0xRRGGBB` value.
pub const fn rgb_from_u32(packed: u32) -> Rgb {
    Rgb {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    }
}

/// Pack a color into a `0xRRGGBB` value for wire transmission.
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
