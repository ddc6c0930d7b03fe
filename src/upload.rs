//! Upload boundary: acceptance checks, decoding, and the full
//! bytes-in/bytes-out styling path.
//!
//! The limits live in an explicit [`UploadConfig`] value that callers pass
//! in; nothing here reads global state.

use std::collections::BTreeSet;

use crate::error::{Result, StyleError};
use crate::output::{encode, EncodedImage};
use crate::pipeline::{apply_style, StyleRequest};
use crate::raster::{ColorMode, RasterBuffer};

/// Default upload size limit (16 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

/// Limits applied to an upload before it reaches the transform engine.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Lowercase file extensions accepted, without the dot.
    pub allowed_extensions: BTreeSet<String>,
    /// Maximum payload size in bytes.
    pub max_content_length: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ["png", "jpg", "jpeg", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl UploadConfig {
    /// Whether the file name carries an allowlisted extension.
    ///
    /// The extension is whatever follows the last `.`, compared
    /// case-insensitively; names without a dot are rejected.
    pub fn allowed_file(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self.allowed_extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    /// Validate an upload's name and size.
    pub fn check_upload(&self, filename: &str, size: u64) -> Result<()> {
        if filename.is_empty() {
            return Err(StyleError::MissingFile);
        }
        if !self.allowed_file(filename) {
            return Err(StyleError::UnsupportedExtension(filename.to_string()));
        }
        if size > self.max_content_length {
            return Err(StyleError::PayloadTooLarge {
                size,
                limit: self.max_content_length,
            });
        }
        Ok(())
    }
}

/// Decode image bytes into an RGB raster.
///
/// Every upload is normalized to three channels, whatever its stored
/// format (palette, grayscale, alpha).
pub fn decode(bytes: &[u8]) -> Result<RasterBuffer> {
    let rgb = image::load_from_memory(bytes)
        .map_err(StyleError::Decode)?
        .into_rgb8();
    let (width, height) = rgb.dimensions();
    RasterBuffer::from_raw(width as usize, height as usize, ColorMode::Rgb, rgb.into_raw())
}

/// Run one upload through acceptance, decoding, styling and encoding.
///
/// # Arguments
/// * `config` - Upload limits
/// * `filename` - Client-supplied file name, used for the extension check
/// * `bytes` - Raw file contents
/// * `style` - Raw style field; `None` means `original`
/// * `intensity` - Raw intensity field; `None` means 1.0
pub fn process_upload(
    config: &UploadConfig,
    filename: &str,
    bytes: &[u8],
    style: Option<&str>,
    intensity: Option<&str>,
) -> Result<EncodedImage> {
    config.check_upload(filename, bytes.len() as u64)?;
    let request = StyleRequest::from_form(style, intensity)?;
    let buffer = decode(bytes)?;

    let (width, height) = (buffer.width(), buffer.height());
    let styled = apply_style(buffer, &request);
    let encoded = encode(styled)?;

    log::info!(
        "styled {} ({}x{}) with {} at intensity {} -> {} bytes {}",
        filename,
        width,
        height,
        request.style(),
        request.intensity(),
        encoded.bytes.len(),
        encoded.mime_type()
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 30) as u8, (y * 30) as u8, 128])
        });
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_allowed_file() {
        let config = UploadConfig::default();
        assert!(config.allowed_file("photo.png"));
        assert!(config.allowed_file("archive.tar.JPEG"));
        assert!(config.allowed_file("x.webp"));
        assert!(!config.allowed_file("photo.gif"));
        assert!(!config.allowed_file("png"));
        assert!(!config.allowed_file("photo."));
    }

    #[test]
    fn test_check_upload_errors() {
        let config = UploadConfig {
            max_content_length: 10,
            ..Default::default()
        };

        assert!(matches!(config.check_upload("", 1), Err(StyleError::MissingFile)));
        assert!(matches!(
            config.check_upload("a.bmp", 1),
            Err(StyleError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            config.check_upload("a.png", 11),
            Err(StyleError::PayloadTooLarge { size: 11, limit: 10 })
        ));
        assert!(config.check_upload("a.png", 10).is_ok());
    }

    #[test]
    fn test_decode_normalizes_to_rgb() {
        let gray = image::GrayImage::from_pixel(3, 2, image::Luma([42]));
        let mut out = std::io::Cursor::new(Vec::new());
        gray.write_to(&mut out, image::ImageFormat::Png).unwrap();

        let buffer = decode(out.get_ref()).unwrap();
        assert_eq!(buffer.mode(), ColorMode::Rgb);
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.get(2, 1), Some(crate::raster::Pixel::Rgb([42, 42, 42])));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode(b"not an image"), Err(StyleError::Decode(_))));
    }

    #[test]
    fn test_process_upload_black_white_is_png() {
        let bytes = png_bytes(5, 4);
        let encoded = process_upload(
            &UploadConfig::default(),
            "in.png",
            &bytes,
            Some("black_white"),
            None,
        )
        .unwrap();

        assert_eq!(encoded.mime_type(), "image/png");
        let out = image::load_from_memory(&encoded.bytes).unwrap();
        assert_eq!(out.color(), image::ColorType::L8);
    }

    #[test]
    fn test_process_upload_sepia_is_jpeg() {
        let bytes = png_bytes(5, 4);
        let encoded = process_upload(
            &UploadConfig::default(),
            "in.PNG",
            &bytes,
            Some("sepia"),
            Some("1.0"),
        )
        .unwrap();
        assert_eq!(encoded.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_process_upload_rejects_bad_intensity() {
        let bytes = png_bytes(2, 2);
        let err = process_upload(
            &UploadConfig::default(),
            "in.png",
            &bytes,
            Some("blur"),
            Some("strong"),
        )
        .unwrap_err();
        assert!(matches!(err, StyleError::MalformedIntensity(_)));
    }
}
