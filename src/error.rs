//! Error type shared by the raster container and the boundary helpers.
//!
//! Pixel filters themselves are total functions and never fail; errors only
//! come from constructing buffers, parsing caller input, and the
//! decode/encode edges.

/// Errors raised around the transform engine.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("invalid raster: {width}x{height} with {channels} channel(s) needs {expected} bytes, got {actual}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(usize),

    #[error("pixel ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("pixel has {found} channel(s), raster expects {expected}")]
    ChannelMismatch { expected: usize, found: usize },

    #[error("intensity is not a finite number: {0:?}")]
    MalformedIntensity(String),

    #[error("no file selected")]
    MissingFile,

    #[error("file type not allowed: {0:?}")]
    UnsupportedExtension(String),

    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

pub type Result<T> = std::result::Result<T, StyleError>;
