//! PNG reading and writing module
//!
//! Readers always hand back 8-bit RGBA so the classifier sees one layout.

mod reader;
mod writer;
mod png_reader;
mod png_writer;

pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use png_reader::PngReader;
pub use png_writer::PngWriter;
