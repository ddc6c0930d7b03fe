//! Owned pixel grid handed to and returned from the filter pipeline.
//!
//! Pixels live in a contiguous `(height, width, channels)` array, the same
//! layout every filter in [`crate::filters`] consumes:
//! - **Grayscale**: (height, width, 1) - single luminance channel
//! - **RGB**: (height, width, 3) - red, green, blue

use ndarray::{Array3, ArrayView3};

use crate::error::{Result, StyleError};
use crate::filters::grayscale::grayscale_u8;

/// Whether a buffer holds one luminance channel or three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Rgb,
    Grayscale,
}

impl ColorMode {
    /// Number of channels stored per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Grayscale => 1,
        }
    }

    fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            3 => Ok(Self::Rgb),
            1 => Ok(Self::Grayscale),
            other => Err(StyleError::UnsupportedChannels(other)),
        }
    }
}

/// A single pixel value read from or written to a [`RasterBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Gray(u8),
    Rgb([u8; 3]),
}

impl Pixel {
    fn channels(&self) -> usize {
        match self {
            Self::Gray(_) => 1,
            Self::Rgb(_) => 3,
        }
    }
}

/// In-memory raster with a declared color mode.
///
/// Every channel value is a `u8`, so the [0, 255] invariant holds by
/// construction; filters clamp before narrowing.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer {
    pixels: Array3<u8>,
    mode: ColorMode,
}

impl RasterBuffer {
    /// Build a buffer from row-major interleaved bytes.
    ///
    /// # Arguments
    /// * `width`, `height` - Dimensions in pixels, both must be non-zero
    /// * `mode` - Color mode, decides the expected channel count
    /// * `data` - `width * height * channels` bytes
    pub fn from_raw(width: usize, height: usize, mode: ColorMode, data: Vec<u8>) -> Result<Self> {
        let channels = mode.channels();
        let expected = width * height * channels;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(StyleError::InvalidDimensions {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }

        let pixels = Array3::from_shape_vec((height, width, channels), data).map_err(|_| {
            StyleError::InvalidDimensions {
                width,
                height,
                channels,
                expected,
                actual: expected,
            }
        })?;
        Ok(Self { pixels, mode })
    }

    /// Wrap an existing `(height, width, channels)` array.
    ///
    /// The color mode is inferred from the channel count (1 or 3).
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        let mode = ColorMode::from_channels(channels)?;
        if width == 0 || height == 0 {
            return Err(StyleError::InvalidDimensions {
                width,
                height,
                channels,
                expected: width * height * channels,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels, mode })
    }

    /// Wrap the result of a filter. Filters only ever emit 1 or 3 channels
    /// and keep the input's non-zero dimensions.
    pub(crate) fn from_filter_output(pixels: Array3<u8>) -> Self {
        let mode = if pixels.dim().2 == 1 {
            ColorMode::Grayscale
        } else {
            ColorMode::Rgb
        };
        Self { pixels, mode }
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let data = match pixel {
            Pixel::Gray(v) => vec![v; width * height],
            Pixel::Rgb(rgb) => rgb.repeat(width * height),
        };
        let mode = match pixel {
            Pixel::Gray(_) => ColorMode::Grayscale,
            Pixel::Rgb(_) => ColorMode::Rgb,
        };
        Self::from_raw(width, height, mode, data)
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Read the pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(match self.mode {
            ColorMode::Grayscale => Pixel::Gray(self.pixels[[y, x, 0]]),
            ColorMode::Rgb => Pixel::Rgb([
                self.pixels[[y, x, 0]],
                self.pixels[[y, x, 1]],
                self.pixels[[y, x, 2]],
            ]),
        })
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// The pixel variant has to match the buffer's color mode.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(StyleError::OutOfBounds { x, y, width, height });
        }
        match (self.mode, pixel) {
            (ColorMode::Grayscale, Pixel::Gray(v)) => {
                self.pixels[[y, x, 0]] = v;
            }
            (ColorMode::Rgb, Pixel::Rgb(rgb)) => {
                for (c, v) in rgb.into_iter().enumerate() {
                    self.pixels[[y, x, c]] = v;
                }
            }
            _ => {
                return Err(StyleError::ChannelMismatch {
                    expected: self.channels(),
                    found: pixel.channels(),
                })
            }
        }
        Ok(())
    }

    /// Borrow the pixels as a `(height, width, channels)` view.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Take ownership of the underlying array.
    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// Row-major interleaved bytes, as expected by image encoders.
    pub fn into_raw(self) -> Vec<u8> {
        if self.pixels.is_standard_layout() {
            self.pixels.into_raw_vec_and_offset().0
        } else {
            self.pixels.iter().copied().collect()
        }
    }

    /// Luminance copy of this buffer. Already-grayscale buffers are cloned.
    pub fn to_grayscale(&self) -> Self {
        match self.mode {
            ColorMode::Grayscale => self.clone(),
            ColorMode::Rgb => Self {
                pixels: grayscale_u8(self.view()),
                mode: ColorMode::Grayscale,
            },
        }
    }

    /// Three-channel copy of this buffer. Grayscale values are replicated.
    pub fn to_rgb(&self) -> Self {
        match self.mode {
            ColorMode::Rgb => self.clone(),
            ColorMode::Grayscale => {
                let (height, width, _) = self.pixels.dim();
                let pixels = Array3::from_shape_fn((height, width, 3), |(y, x, _)| {
                    self.pixels[[y, x, 0]]
                });
                Self {
                    pixels,
                    mode: ColorMode::Rgb,
                }
            }
        }
    }
}
