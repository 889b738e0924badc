//! Pixel classification module
//!
//! This module decides, pixel by pixel, what counts as background and clears it.

mod classifier;
pub mod types;

pub use types::{
    PixelClass, StripConfig, StripConfigBuilder, StripStats, DEFAULT_BACKGROUND_COLORS,
    TRANSPARENT_BACKGROUND,
};
