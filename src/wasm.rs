//! WebAssembly exports for the style pipeline.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as flat interleaved byte arrays (1 or 3 channels).

use wasm_bindgen::prelude::*;

use crate::output::select_encoding;
use crate::pipeline::Style;
use crate::raster::{ColorMode, RasterBuffer};

fn mode_for(channels: usize) -> Result<ColorMode, JsValue> {
    match channels {
        1 => Ok(ColorMode::Grayscale),
        3 => Ok(ColorMode::Rgb),
        other => Err(JsValue::from_str(&format!(
            "unsupported channel count: {other}"
        ))),
    }
}

/// Apply a named style to a flat image.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1 (grayscale) or 3 (RGB)
/// * `style` - Style name; unknown names return the input unchanged
/// * `intensity` - Effect strength
///
/// # Returns
/// Flat array of styled bytes. Use `output_channels_wasm` for its layout.
#[wasm_bindgen]
pub fn transform_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    style: &str,
    intensity: f64,
) -> Result<Vec<u8>, JsValue> {
    let mode = mode_for(channels)?;
    let buffer = RasterBuffer::from_raw(width, height, mode, data.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let (result, _) = crate::pipeline::transform(buffer, style, intensity);
    Ok(result.into_raw())
}

/// Channel count a style produces for an input with `channels` channels.
#[wasm_bindgen]
pub fn output_channels_wasm(style: &str, channels: usize) -> Result<usize, JsValue> {
    let mode = mode_for(channels)?;
    Ok(Style::parse(style).output_mode(mode).channels())
}

/// MIME type a styled result should be encoded as.
#[wasm_bindgen]
pub fn output_mime_wasm(style: &str, channels: usize) -> Result<String, JsValue> {
    let mode = mode_for(channels)?;
    let out_mode = Style::parse(style).output_mode(mode);
    Ok(select_encoding(out_mode).mime_type().to_string())
}
