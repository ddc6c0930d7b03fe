//! Stylize filters: Sepia, Vignette.
//!
//! These are artistic effect filters.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - sepia promotes to RGB, vignette keeps 1 channel
//! - **RGB**: (height, width, 3) - processes all 3 channels
//!
//! Both filters truncate toward zero when narrowing back to `u8`, matching
//! the classic integer tone-mapping formulas.

use ndarray::{Array3, ArrayView3, Axis};
use rayon::prelude::*;

// ============================================================================
// Sepia
// ============================================================================

/// Sepia tone matrix, rows produce R', G', B' from (R, G, B).
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply sepia tone mapping.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// (height, width, 3) sepia-toned image
pub fn sepia_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let rgb = [0, 1, 2].map(|c| input[[y, x, c.min(channels - 1)]] as f64);

            for (c, weights) in SEPIA.iter().enumerate() {
                let v = weights[0] * rgb[0] + weights[1] * rgb[1] + weights[2] * rgb[2];
                // Coefficients are non-negative, only the upper bound can overflow
                output[[y, x, c]] = v.min(255.0) as u8;
            }
        }
    }
    output
}

// ============================================================================
// Vignette
// ============================================================================

/// Darken pixels in proportion to their distance from the image center.
///
/// The center is `(width / 2, height / 2)` in integer coordinates and the
/// falloff is normalized by the distance from the center to the origin
/// corner, so pixel (0, 0) always receives the full `percent` darkening.
/// Rows are processed in parallel with Rayon.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `percent` - Darkening at the corner, clamped to 0-100. 0 = no change
///
/// # Returns
/// Vignetted image with same channel count
pub fn vignette_u8(input: ArrayView3<u8>, percent: i32) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let strength = (percent as f64 / 100.0).clamp(0.0, 1.0);

    let center_x = (width / 2) as f64;
    let center_y = (height / 2) as f64;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();

    let mut output = Array3::<u8>::zeros((height, width, channels));
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            let dy = y as f64 - center_y;
            for x in 0..width {
                let dx = x as f64 - center_x;
                let factor = if max_dist > 0.0 {
                    1.0 - ((dx * dx + dy * dy).sqrt() / max_dist) * strength
                } else {
                    1.0
                };

                for c in 0..channels {
                    row[[x, c]] = (input[[y, x, c]] as f64 * factor) as u8;
                }
            }
        });

    output
}
