use std::path::Path;
use tracing::{error, info, warn};

use crate::image_pipeline::batch::types::{BatchReport, display_name};
use crate::image_pipeline::classify::StripStats;
use crate::image_pipeline::common::error::StripError;

/// Receives progress events from a batch run.
///
/// Every hook defaults to a no-op so implementors only override what they need.
pub trait ProgressObserver {
    fn batch_started(&self) {}

    fn directory_scanned(&self, _dir: &Path, _file_count: usize) {}

    fn directory_missing(&self, _dir: &Path, _error: &StripError) {}

    fn directory_unreadable(&self, _dir: &Path, _error: &StripError) {}

    fn file_processed(&self, _path: &Path, _stats: &StripStats) {}

    fn file_failed(&self, _path: &Path, _error: &StripError) {}

    fn batch_finished(&self, _report: &BatchReport) {}
}

/// Console progress through `tracing`.
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn batch_started(&self) {
        info!("Removing white backgrounds from PNG assets...");
    }

    fn directory_scanned(&self, dir: &Path, file_count: usize) {
        info!("{}: {} files", display_name(dir), file_count);
    }

    fn directory_missing(&self, _dir: &Path, error: &StripError) {
        warn!("{}", error);
    }

    fn directory_unreadable(&self, dir: &Path, error: &StripError) {
        error!("Skipping {}: {}", dir.display(), error);
    }

    fn file_processed(&self, path: &Path, stats: &StripStats) {
        info!(
            "OK {} ({}/{} pixels cleared)",
            display_name(path),
            stats.cleared_pixels,
            stats.total_pixels()
        );
    }

    fn file_failed(&self, path: &Path, error: &StripError) {
        error!("FAILED {}: {}", display_name(path), error);
    }

    fn batch_finished(&self, report: &BatchReport) {
        info!(
            "Done! {} files stripped, {} failed, {} directories missing, {} unreadable",
            report.files_succeeded(),
            report.files_failed(),
            report.directories_missing(),
            report.directories_unreadable()
        );
    }
}
