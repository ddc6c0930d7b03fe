//! Edge detection filters: Contour ("sketch" style).
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - uses single channel directly
//! - **RGB**: (height, width, 3) - computes luminance from RGB first
//!
//! Output is always single-channel.

use ndarray::{Array3, ArrayView3};

use super::grayscale::grayscale_u8;

// ============================================================================
// Contour
// ============================================================================

/// Contour kernel: center minus its eight neighbours.
const CONTOUR_KERNEL: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];

/// Added to every convolution result so flat regions come out white.
const CONTOUR_OFFSET: i32 = 255;

/// Trace outlines like a pencil sketch.
///
/// Flat areas map to white (255) and intensity discontinuities produce dark
/// lines. The one-pixel border has no full neighbourhood and is copied from
/// the luminance image.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// (height, width, 1) contour image
pub fn contour_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let gray = grayscale_u8(input);
    let (height, width, _) = gray.dim();
    let mut output = gray.clone();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut sum = CONTOUR_OFFSET;
            for ky in 0..3 {
                for kx in 0..3 {
                    let py = y + ky - 1;
                    let px = x + kx - 1;
                    sum += gray[[py, px, 0]] as i32 * CONTOUR_KERNEL[ky][kx];
                }
            }
            output[[y, x, 0]] = sum.clamp(0, 255) as u8;
        }
    }

    output
}
