//! Color adjustment filters: Saturation ("enhance" style).
//!
//! Pixel-wise operation that doesn't require spatial context.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - no-op, returns copy
//! - **RGB**: (height, width, 3) - red, green, blue

use ndarray::{Array3, ArrayView3};

use super::core::luminance_u8;

// ============================================================================
// Saturation
// ============================================================================

/// Scale color saturation (u8 version).
///
/// Each channel is blended between the pixel's rounded luminance and its
/// original value: `gray + factor * (c - gray)`.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `factor` - 0.0 = fully desaturated, 1.0 = unchanged, > 1.0 = more vivid
///
/// # Returns
/// Saturation-adjusted image with same channel count
pub fn saturation_u8(input: ArrayView3<u8>, factor: f32) -> Array3<u8> {
    let (height, width, channels) = input.dim();

    // Saturation only makes sense for RGB
    if channels == 1 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = (input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            let gray = luminance_u8(r, g, b) as f32;

            for (c, v) in [r, g, b].into_iter().enumerate() {
                let blended = gray + factor * (v as f32 - gray);
                output[[y, x, c]] = blended.clamp(0.0, 255.0) as u8;
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(r: u8, g: u8, b: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = r;
        img[[0, 0, 1]] = g;
        img[[0, 0, 2]] = b;
        img
    }

    #[test]
    fn test_saturation_one_is_identity() {
        let img = pixel(200, 40, 90);
        assert_eq!(saturation_u8(img.view(), 1.0), img);
    }

    #[test]
    fn test_saturation_zero_is_luminance() {
        let img = pixel(200, 100, 50);
        let result = saturation_u8(img.view(), 0.0);

        assert_eq!(result[[0, 0, 0]], 124);
        assert_eq!(result[[0, 0, 1]], 124);
        assert_eq!(result[[0, 0, 2]], 124);
    }

    #[test]
    fn test_saturation_boost_clamps() {
        let img = pixel(250, 10, 10);
        let result = saturation_u8(img.view(), 3.0);

        // gray = 82; red: 82 + 3 * 168 > 255, green: 82 - 3 * 72 < 0
        assert_eq!(result[[0, 0, 0]], 255);
        assert_eq!(result[[0, 0, 1]], 0);
        assert_eq!(result[[0, 0, 2]], 0);
    }

    #[test]
    fn test_saturation_half_moves_toward_gray() {
        let img = pixel(200, 100, 50);
        let result = saturation_u8(img.view(), 0.5);

        // 124 + 0.5 * (200 - 124) = 162
        assert_eq!(result[[0, 0, 0]], 162);
        // 124 + 0.5 * (100 - 124) = 112
        assert_eq!(result[[0, 0, 1]], 112);
        // 124 + 0.5 * (50 - 124) = 87
        assert_eq!(result[[0, 0, 2]], 87);
    }

    #[test]
    fn test_saturation_grayscale_noop() {
        let mut img = Array3::<u8>::zeros((1, 1, 1));
        img[[0, 0, 0]] = 128;

        let result = saturation_u8(img.view(), 0.0);
        assert_eq!(result[[0, 0, 0]], 128);
    }
}
