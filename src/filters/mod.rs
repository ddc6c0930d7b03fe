//! Pixel filters behind the style pipeline.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//!
//! Every filter takes an `ArrayView3<u8>` and returns a freshly allocated
//! `Array3<u8>`, so input and output never alias.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale, saturation, sepia
//! - **Position-dependent**: vignette
//! - **Neighborhood**: gaussian blur, contour

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod stylize;
pub mod edge;
pub mod blur;
