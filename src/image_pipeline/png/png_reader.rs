//! PNG reader backed by the `image` crate.
//!
//! Any PNG color type is accepted. Grayscale, RGB and palette images are
//! widened to 8-bit RGBA; a missing alpha channel becomes fully opaque.

use image::{ImageFormat, RgbaImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, StripError};
use crate::image_pipeline::png::reader::ImageReader;

pub struct PngReader;

impl ImageReader for PngReader {
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| StripError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.into_rgba8())
    }
}
