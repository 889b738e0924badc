use std::io::Write;
use image::RgbaImage;
use crate::image_pipeline::common::error::Result;

pub trait ImageWriter {
    fn write_rgba(&self, image: &RgbaImage, output: &mut dyn Write) -> Result<()>;
}
