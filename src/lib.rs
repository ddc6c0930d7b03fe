//! PixelStyle
//!
//! Style transforms for raster images: black & white, sepia, sketch, blur,
//! color enhance and vignette, plus the policy that decides how a result is
//! encoded. Python bindings via PyO3 and WASM bindings for JavaScript are
//! available behind the `python` and `wasm` features.
//!
//! ## Image Format
//! Buffers are 8-bit with one of two channel configurations:
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//!
//! ## Flow
//! decoded [`RasterBuffer`] → [`apply_style`] → styled buffer →
//! [`select_encoding`] → [`encode`]. The [`upload`] module wraps the whole
//! path, including acceptance checks and decoding, for byte-oriented callers.

pub mod error;
pub mod filters;
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod upload;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, StyleError};
pub use output::{encode, select_encoding, EncodedImage, OutputEncoding};
pub use pipeline::{apply_style, transform, Style, StyleRequest};
pub use raster::{ColorMode, Pixel, RasterBuffer};
pub use upload::{decode, process_upload, UploadConfig};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    use crate::error::StyleError;
    use crate::output::select_encoding;
    use crate::raster::RasterBuffer;
    use crate::upload::{process_upload, UploadConfig};

    fn to_py_err(err: StyleError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Apply a named style to an image array.
    ///
    /// # Arguments
    /// * `image` - (height, width, 1) or (height, width, 3) u8 array
    /// * `style` - Style name; unknown names return the image unchanged
    /// * `intensity` - Effect strength (default: 1.0)
    ///
    /// # Returns
    /// Tuple of the styled array and the MIME type it should be encoded as
    #[pyfunction]
    #[pyo3(signature = (image, style="original", intensity=1.0))]
    pub fn transform<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        style: &str,
        intensity: f64,
    ) -> PyResult<(Bound<'py, PyArray3<u8>>, &'static str)> {
        let buffer = RasterBuffer::from_array(image.as_array().to_owned()).map_err(to_py_err)?;
        let (result, mode) = crate::pipeline::transform(buffer, style, intensity);
        Ok((
            result.into_array().into_pyarray(py),
            select_encoding(mode).mime_type(),
        ))
    }

    /// Style an uploaded file and return the encoded bytes and MIME type.
    ///
    /// Uses the default upload limits (png/jpg/jpeg/webp, 16 MiB).
    #[pyfunction]
    #[pyo3(signature = (filename, data, style=None, intensity=None))]
    pub fn style_upload<'py>(
        py: Python<'py>,
        filename: &str,
        data: &[u8],
        style: Option<&str>,
        intensity: Option<&str>,
    ) -> PyResult<(Bound<'py, PyBytes>, &'static str)> {
        let encoded = process_upload(&UploadConfig::default(), filename, data, style, intensity)
            .map_err(to_py_err)?;
        Ok((PyBytes::new(py, &encoded.bytes), encoded.mime_type()))
    }

    #[pymodule]
    pub fn pixelstyle(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(transform, m)?)?;
        m.add_function(wrap_pyfunction!(style_upload, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelstyle;
