//! Output encoding policy and the `image`-crate encoder behind it.
//!
//! - **Grayscale** results are written losslessly as PNG (`image/png`)
//! - **RGB** results are written as JPEG at quality 90 (`image/jpeg`)

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Result, StyleError};
use crate::raster::{ColorMode, RasterBuffer};

/// JPEG quality used for every three-channel result.
pub const LOSSY_QUALITY: u8 = 90;

/// Encoding chosen for a styled result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    /// Single-channel PNG.
    Lossless,
    /// Three-channel JPEG at the given quality (1-100).
    Lossy { quality: u8 },
}

impl OutputEncoding {
    pub fn quality(self) -> Option<u8> {
        match self {
            Self::Lossless => None,
            Self::Lossy { quality } => Some(quality),
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Lossless => "image/png",
            Self::Lossy { .. } => "image/jpeg",
        }
    }
}

/// Pick the encoding for a buffer of the given color mode.
pub fn select_encoding(mode: ColorMode) -> OutputEncoding {
    match mode {
        ColorMode::Grayscale => OutputEncoding::Lossless,
        ColorMode::Rgb => OutputEncoding::Lossy {
            quality: LOSSY_QUALITY,
        },
    }
}

/// Encoded bytes plus the label a response needs.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub encoding: OutputEncoding,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        self.encoding.mime_type()
    }
}

/// Encode a styled buffer using the encoding its color mode selects.
pub fn encode(buffer: RasterBuffer) -> Result<EncodedImage> {
    let encoding = select_encoding(buffer.mode());
    let (width, height) = (buffer.width() as u32, buffer.height() as u32);
    let mut out = Cursor::new(Vec::new());

    match encoding {
        OutputEncoding::Lossless => {
            PngEncoder::new(&mut out)
                .write_image(&buffer.into_raw(), width, height, ExtendedColorType::L8)
                .map_err(StyleError::Encode)?;
        }
        OutputEncoding::Lossy { quality } => {
            JpegEncoder::new_with_quality(&mut out, quality)
                .write_image(&buffer.into_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(StyleError::Encode)?;
        }
    }

    let bytes = out.into_inner();
    log::debug!(
        "encoded {}x{} raster as {} ({} bytes)",
        width,
        height,
        encoding.mime_type(),
        bytes.len()
    );
    Ok(EncodedImage { bytes, encoding })
}
