//! Background stripping pipeline module
//!
//! This module splits the work into a pixel classifier, PNG reading and writing,
//! the per-image conversion, and the batch walk over asset directories.

pub mod classify;
pub mod png;
pub mod conversions;
pub mod batch;
pub mod common;

pub use common::{
    StripError,
    Result,
};

pub use classify::{
    PixelClass,
    StripConfig,
    StripConfigBuilder,
    StripStats,
    DEFAULT_BACKGROUND_COLORS,
};

pub use png::{
    ImageReader,
    ImageWriter,
    PngReader,
    PngWriter,
};

pub use conversions::{
    BackgroundStripPipeline,
};

pub use batch::{
    BatchConfig,
    BatchDriver,
    BatchReport,
    DirectoryOutcome,
    DirectoryReport,
    DirectoryWalker,
    FileOutcome,
    ProgressObserver,
    TracingObserver,
    DEFAULT_TARGET_DIRECTORIES,
};
