//! Batch processing module
//!
//! Walks the asset directories and strips every PNG found directly inside them.
//! Failures stay local to the file or directory that produced them.

mod driver;
mod observer;
mod walker;
pub mod types;

pub use driver::BatchDriver;
pub use observer::{ProgressObserver, TracingObserver};
pub use walker::{DirectoryWalker, list_png_files};
pub use types::{
    BatchConfig, BatchReport, DirectoryOutcome, DirectoryReport, FileOutcome,
    DEFAULT_TARGET_DIRECTORIES, PNG_EXTENSION,
};
