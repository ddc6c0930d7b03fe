//! Blur filters: Gaussian Blur.
//!
//! The Gaussian is approximated by three successive extended box blurs per
//! axis, with the box width derived from the requested standard deviation.
//! Each box pass keeps a running window sum, so the cost per pixel does not
//! grow with the radius. Rows are blurred in parallel, then columns, with
//! Rayon; each line is independent so results do not depend on thread
//! scheduling. Edges are clamped.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1)
//! - **RGB**: (height, width, 3)

use ndarray::{Array3, ArrayView3, ArrayViewMut2, Axis};
use rayon::prelude::*;

use super::core::round_to_u8;

/// Number of box passes per axis.
const BOX_PASSES: u32 = 3;

/// Radius of an extended box whose `passes`-fold repetition has variance
/// `sigma²`.
///
/// The integer part is the fully weighted half-width; the fractional part
/// weights the two samples just outside it.
pub fn extended_box_radius(sigma: f64, passes: u32) -> f64 {
    let sigma2 = sigma * sigma / passes as f64;
    let l = (((12.0 * sigma2 + 1.0).sqrt() - 1.0) / 2.0).floor();
    let a = (2.0 * l + 1.0) * (l * (l + 1.0) - 3.0 * sigma2)
        / (6.0 * (sigma2 - (l + 1.0) * (l + 1.0)));
    l + a
}

/// One extended box pass over `src` into `dst`, clamping at both ends.
fn box_blur_line(src: &[f64], dst: &mut [f64], radius: f64) {
    if src.is_empty() {
        return;
    }
    let last = src.len() as isize - 1;
    let at = |i: isize| src[i.clamp(0, last) as usize];

    let whole = radius.floor();
    let frac = radius - whole;
    let r = whole as isize;
    let norm = 1.0 / (2.0 * radius + 1.0);

    let mut sum: f64 = (-r..=r).map(at).sum();
    for (i, out) in dst.iter_mut().enumerate() {
        let i = i as isize;
        *out = (sum + frac * (at(i - r - 1) + at(i + r + 1))) * norm;
        sum += at(i + r + 1) - at(i - r);
    }
}

/// Blur every channel of a `(length, channels)` slab along its first axis.
fn blur_lines(mut lines: ArrayViewMut2<f64>, radius: f64) {
    let len = lines.dim().0;
    let mut line = vec![0.0; len];
    let mut scratch = vec![0.0; len];

    for mut channel in lines.axis_iter_mut(Axis(1)) {
        for (dst, &v) in line.iter_mut().zip(channel.iter()) {
            *dst = v;
        }
        for _ in 0..BOX_PASSES {
            box_blur_line(&line, &mut scratch, radius);
            std::mem::swap(&mut line, &mut scratch);
        }
        for (dst, &v) in channel.iter_mut().zip(line.iter()) {
            *dst = v;
        }
    }
}

/// Apply Gaussian blur.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `radius` - Standard deviation of the blur in pixels; `<= 0` returns a copy.
///   Capped at the larger image dimension.
///
/// # Returns
/// Blurred image with same dimensions and channel count
pub fn gaussian_blur_u8(input: ArrayView3<u8>, radius: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();

    if radius <= 0.0 || !radius.is_finite() {
        return input.to_owned();
    }

    let sigma = radius.min(height.max(width) as f32) as f64;
    let box_radius = extended_box_radius(sigma, BOX_PASSES);

    let mut work = input.mapv(f64::from);

    // Pass 1: Horizontal
    work.axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|row| blur_lines(row, box_radius));

    // Pass 2: Vertical
    work.axis_iter_mut(Axis(1))
        .into_par_iter()
        .for_each(|column| blur_lines(column, box_radius));

    work.mapv(|v| round_to_u8(v as f32))
}
