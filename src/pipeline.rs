//! Style dispatch: maps a requested style and intensity onto one filter.
//!
//! | style | filter | parameter |
//! |-------|--------|-----------|
//! | `black_white` | grayscale | - |
//! | `sepia` | sepia | - |
//! | `sketch` | grayscale, then contour | - |
//! | `blur` | gaussian blur | radius = 5 × intensity |
//! | `enhance` | saturation | factor = intensity |
//! | `vignette` | vignette | percent = trunc(30 × intensity) |
//! | anything else | identity | - |

use std::fmt;

use crate::error::{Result, StyleError};
use crate::filters::blur::gaussian_blur_u8;
use crate::filters::color_adjust::saturation_u8;
use crate::filters::edge::contour_u8;
use crate::filters::stylize::{sepia_u8, vignette_u8};
use crate::raster::{ColorMode, RasterBuffer};

/// Intensity used when the caller does not supply one.
pub const DEFAULT_INTENSITY: f64 = 1.0;

/// Upper bound applied to intensities before they reach a filter.
pub const MAX_INTENSITY: f64 = 100.0;

const BLUR_RADIUS_PER_INTENSITY: f64 = 5.0;
const VIGNETTE_PERCENT_PER_INTENSITY: f64 = 30.0;

/// The closed set of styles. Unknown names resolve to [`Style::Original`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Original,
    BlackWhite,
    Sepia,
    Sketch,
    Blur,
    Enhance,
    Vignette,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::Original,
        Style::BlackWhite,
        Style::Sepia,
        Style::Sketch,
        Style::Blur,
        Style::Enhance,
        Style::Vignette,
    ];

    /// Resolve a style name. Matching is exact; anything unrecognized is
    /// the identity style.
    pub fn parse(name: &str) -> Self {
        match name {
            "black_white" => Self::BlackWhite,
            "sepia" => Self::Sepia,
            "sketch" => Self::Sketch,
            "blur" => Self::Blur,
            "enhance" => Self::Enhance,
            "vignette" => Self::Vignette,
            _ => Self::Original,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::BlackWhite => "black_white",
            Self::Sepia => "sepia",
            Self::Sketch => "sketch",
            Self::Blur => "blur",
            Self::Enhance => "enhance",
            Self::Vignette => "vignette",
        }
    }

    /// Color mode of the result for an input of the given mode.
    pub fn output_mode(self, input: ColorMode) -> ColorMode {
        match self {
            Self::BlackWhite | Self::Sketch => ColorMode::Grayscale,
            Self::Sepia | Self::Enhance | Self::Vignette => ColorMode::Rgb,
            Self::Original | Self::Blur => input,
        }
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transform invocation: a style plus its sanitized intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRequest {
    style: Style,
    intensity: f64,
}

impl StyleRequest {
    /// Build a request, forcing the intensity into `[0, MAX_INTENSITY]`.
    ///
    /// Negative and NaN intensities become 0.0 (no effect for blur and
    /// vignette, full desaturation for enhance); larger values, including
    /// infinity, are capped.
    pub fn new(style: Style, intensity: f64) -> Self {
        let sanitized = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, MAX_INTENSITY)
        };
        if sanitized != intensity {
            log::warn!(
                "intensity {} out of range for style {}, using {}",
                intensity,
                style,
                sanitized
            );
        }
        Self {
            style,
            intensity: sanitized,
        }
    }

    /// Parse raw form fields.
    ///
    /// A missing style is `original` and a missing intensity is
    /// [`DEFAULT_INTENSITY`]. Intensity text that isn't a finite number is
    /// rejected here, before any pixels are touched.
    pub fn from_form(style: Option<&str>, intensity: Option<&str>) -> Result<Self> {
        let style = style.map(Style::parse).unwrap_or(Style::Original);
        let intensity = match intensity {
            None => DEFAULT_INTENSITY,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => return Err(StyleError::MalformedIntensity(raw.to_string())),
            },
        };
        Ok(Self::new(style, intensity))
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Gaussian sigma for the blur style.
    pub fn blur_radius(&self) -> f32 {
        (BLUR_RADIUS_PER_INTENSITY * self.intensity) as f32
    }

    /// Blend factor for the enhance style.
    pub fn saturation_factor(&self) -> f32 {
        self.intensity as f32
    }

    /// Corner darkening percentage for the vignette style.
    pub fn vignette_percent(&self) -> i32 {
        (VIGNETTE_PERCENT_PER_INTENSITY * self.intensity) as i32
    }
}

impl Default for StyleRequest {
    fn default() -> Self {
        Self::new(Style::Original, DEFAULT_INTENSITY)
    }
}

/// Run the filter selected by `request` over `buffer`.
///
/// Pure function of its inputs; the input buffer is consumed and either
/// returned untouched (identity) or replaced by a new buffer.
pub fn apply_style(buffer: RasterBuffer, request: &StyleRequest) -> RasterBuffer {
    log::debug!(
        "applying style {} (intensity {}) to {}x{} {:?} raster",
        request.style,
        request.intensity,
        buffer.width(),
        buffer.height(),
        buffer.mode()
    );

    let pixels = match request.style {
        Style::Original => return buffer,
        Style::BlackWhite => return buffer.to_grayscale(),
        Style::Sepia => sepia_u8(buffer.view()),
        Style::Sketch => contour_u8(buffer.to_grayscale().view()),
        Style::Blur => {
            let radius = request.blur_radius();
            log::debug!("gaussian blur radius {}", radius);
            gaussian_blur_u8(buffer.view(), radius)
        }
        Style::Enhance => saturation_u8(buffer.to_rgb().view(), request.saturation_factor()),
        Style::Vignette => {
            let percent = request.vignette_percent();
            log::debug!("vignette percent {}", percent);
            vignette_u8(buffer.to_rgb().view(), percent)
        }
    };

    RasterBuffer::from_filter_output(pixels)
}

/// String-keyed entry point: style name plus intensity in, styled buffer
/// and its color mode out. Never fails; unknown styles are the identity.
pub fn transform(buffer: RasterBuffer, style: &str, intensity: f64) -> (RasterBuffer, ColorMode) {
    let request = StyleRequest::new(Style::parse(style), intensity);
    let result = apply_style(buffer, &request);
    let mode = result.mode();
    (result, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    fn gradient() -> RasterBuffer {
        let data = (0..4 * 3)
            .flat_map(|i| [(i * 20) as u8, (255 - i * 15) as u8, (i * 7) as u8])
            .collect();
        RasterBuffer::from_raw(4, 3, ColorMode::Rgb, data).unwrap()
    }

    #[test]
    fn test_parse_known_and_unknown_names() {
        for style in Style::ALL {
            assert_eq!(Style::parse(style.as_str()), style);
        }
        assert_eq!(Style::parse("unknown_style"), Style::Original);
        assert_eq!(Style::parse(""), Style::Original);
        assert_eq!(Style::parse("SEPIA"), Style::Original);
    }

    #[test]
    fn test_request_sanitizes_intensity() {
        assert_eq!(StyleRequest::new(Style::Blur, -2.0).intensity(), 0.0);
        assert_eq!(StyleRequest::new(Style::Blur, f64::NAN).intensity(), 0.0);
        assert_eq!(StyleRequest::new(Style::Blur, f64::INFINITY).intensity(), MAX_INTENSITY);
        assert_eq!(StyleRequest::new(Style::Blur, 0.4).intensity(), 0.4);
    }

    #[test]
    fn test_kernel_parameters() {
        let req = StyleRequest::new(Style::Vignette, 1.0);
        assert_eq!(req.vignette_percent(), 30);
        assert_eq!(req.blur_radius(), 5.0);

        // Percent is truncated like an integer cast
        assert_eq!(StyleRequest::new(Style::Vignette, 0.05).vignette_percent(), 1);
        assert_eq!(StyleRequest::new(Style::Vignette, 0.02).vignette_percent(), 0);

        // 30 * 2.1 is 63.000000000000007 in double precision
        assert_eq!(StyleRequest::new(Style::Vignette, 2.1).vignette_percent(), 63);
        assert_eq!(StyleRequest::new(Style::Vignette, 0.7).vignette_percent(), 21);
    }

    #[test]
    fn test_from_form_defaults_and_errors() {
        let req = StyleRequest::from_form(None, None).unwrap();
        assert_eq!(req.style(), Style::Original);
        assert_eq!(req.intensity(), DEFAULT_INTENSITY);

        let req = StyleRequest::from_form(Some("blur"), Some(" 0.5 ")).unwrap();
        assert_eq!(req.style(), Style::Blur);
        assert_eq!(req.intensity(), 0.5);

        for bad in ["abc", "", "nan", "inf", "1.0x"] {
            let err = StyleRequest::from_form(Some("blur"), Some(bad)).unwrap_err();
            assert!(matches!(err, StyleError::MalformedIntensity(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_original_returns_input() {
        let input = gradient();
        let (output, mode) = transform(input.clone(), "original", 3.0);
        assert_eq!(output, input);
        assert_eq!(mode, ColorMode::Rgb);
    }

    #[test]
    fn test_output_modes_match_dispatch() {
        for style in Style::ALL {
            let (output, mode) = transform(gradient(), style.as_str(), 1.0);
            assert_eq!(mode, style.output_mode(ColorMode::Rgb), "{style}");
            assert_eq!(output.mode(), mode);
            assert_eq!((output.width(), output.height()), (4, 3));
        }
    }

    #[test]
    fn test_sketch_of_flat_image_is_white_inside() {
        let input = RasterBuffer::filled(4, 4, Pixel::Rgb([10, 20, 30])).unwrap();
        let (output, _) = transform(input, "sketch", 1.0);
        assert_eq!(output.get(1, 1), Some(Pixel::Gray(255)));
        assert_eq!(output.get(2, 2), Some(Pixel::Gray(255)));
    }

    #[test]
    fn test_blur_keeps_grayscale_mode() {
        let input = RasterBuffer::filled(5, 5, Pixel::Gray(60)).unwrap();
        let (output, mode) = transform(input, "blur", 1.0);
        assert_eq!(mode, ColorMode::Grayscale);
        assert_eq!(output.get(2, 2), Some(Pixel::Gray(60)));
    }

    #[test]
    fn test_vignette_promotes_grayscale_to_rgb() {
        let input = RasterBuffer::filled(3, 3, Pixel::Gray(100)).unwrap();
        let (output, mode) = transform(input, "vignette", 1.0);
        assert_eq!(mode, ColorMode::Rgb);
        assert_eq!(output.get(1, 1), Some(Pixel::Rgb([100, 100, 100])));
    }
}
