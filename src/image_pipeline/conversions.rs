//! Pipeline conversions module
//!
//! This module contains the per-image orchestration: decode, strip, encode.

mod strip_background;


pub use strip_background::BackgroundStripPipeline;
