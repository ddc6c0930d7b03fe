//! Core utilities shared by the style filters.
//!
//! This module provides:
//! - Luminance conversion
//! - Rounding/clamping back to 8-bit channels

/// ITU-R BT.601 luma coefficients in 16.16 fixed point. The three weights
/// sum to exactly 65536, so neutral grays map to themselves.
pub const LUMA_R: u32 = 19595;
pub const LUMA_G: u32 = 38470;
pub const LUMA_B: u32 = 7471;

const LUMA_SHIFT: u32 = 16;
const LUMA_HALF: u32 = 1 << (LUMA_SHIFT - 1);

/// Luminance rounded to the nearest 8-bit value.
///
/// Integer arithmetic only, so every platform produces the same byte as the
/// usual 8-bit "L" conversion.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((weighted + LUMA_HALF) >> LUMA_SHIFT) as u8
}

/// Round to nearest and clamp into [0, 255].
#[inline]
pub fn round_to_u8(v: f32) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}
