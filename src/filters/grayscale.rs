//! Grayscale conversion filter ("black & white" style).
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - no-op, returns copy
//! - **RGB**: (height, width, 3) - collapses to a single luminance channel
//!
//! Luminance uses the BT.601 weights from [`super::core`], rounded to the
//! nearest integer.

use ndarray::{Array3, ArrayView3};

use super::core::luminance_u8;

/// Convert an image to single-channel luminance.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// New (height, width, 1) array
pub fn grayscale_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    if channels == 1 {
        return input.to_owned();
    }

    Array3::from_shape_fn((height, width, 1), |(y, x, _)| {
        luminance_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
    })
}
