use image::RgbaImage;
use crate::image_pipeline::common::error::Result;

pub trait ImageReader {
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImage>;
}
