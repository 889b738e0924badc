use std::io::Write;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, StripError};
use crate::image_pipeline::png::writer::ImageWriter;

pub struct PngWriter;

impl ImageWriter for PngWriter {
    fn write_rgba(&self, image: &RgbaImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut buffer = Vec::new();

        PngEncoder::new(&mut buffer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| StripError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
