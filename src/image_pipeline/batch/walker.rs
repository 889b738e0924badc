use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::image_pipeline::batch::observer::ProgressObserver;
use crate::image_pipeline::batch::types::{
    DirectoryOutcome, DirectoryReport, FileOutcome, PNG_EXTENSION,
};
use crate::image_pipeline::common::error::{Result, StripError};
use crate::image_pipeline::conversions::BackgroundStripPipeline;
use crate::image_pipeline::png::{ImageReader, ImageWriter};

/// Lists the PNG files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into, and the extension match is
/// case-sensitive (`sprite.PNG` is skipped).
pub fn list_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| StripError::DirectoryReadError {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.extension().is_some_and(|ext| ext == PNG_EXTENSION) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Strips every PNG in a single directory, in place.
pub struct DirectoryWalker<'a, R: ImageReader, W: ImageWriter> {
    pipeline: &'a BackgroundStripPipeline<R, W>,
    observer: &'a dyn ProgressObserver,
}

impl<'a, R: ImageReader, W: ImageWriter> DirectoryWalker<'a, R, W> {
    pub fn new(
        pipeline: &'a BackgroundStripPipeline<R, W>,
        observer: &'a dyn ProgressObserver,
    ) -> Self {
        Self { pipeline, observer }
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn walk(&self, dir: &Path) -> DirectoryReport {
        let outcome = if !dir.exists() {
            let missing = StripError::MissingDirectory(dir.to_path_buf());
            self.observer.directory_missing(dir, &missing);
            DirectoryOutcome::Missing(missing)
        } else {
            match list_png_files(dir) {
                Ok(files) => {
                    self.observer.directory_scanned(dir, files.len());
                    DirectoryOutcome::Processed(
                        files.into_iter().map(|path| self.strip_file(path)).collect(),
                    )
                }
                Err(e) => {
                    self.observer.directory_unreadable(dir, &e);
                    DirectoryOutcome::Unreadable(e)
                }
            }
        };

        DirectoryReport {
            path: dir.to_path_buf(),
            outcome,
        }
    }

    fn strip_file(&self, path: PathBuf) -> FileOutcome {
        let result = self.pipeline.convert_file(&path, &path);
        match &result {
            Ok(stats) => self.observer.file_processed(&path, stats),
            Err(e) => {
                debug!("Continuing after failure on {}", path.display());
                self.observer.file_failed(&path, e);
            }
        }
        FileOutcome { path, result }
    }
}
