//! Batch configuration and report types

use std::path::{Path, PathBuf};

use crate::image_pipeline::classify::StripStats;
use crate::image_pipeline::common::error::{Result, StripError};

/// Asset subdirectories processed by default, in order.
pub const DEFAULT_TARGET_DIRECTORIES: [&str; 4] = ["towers", "enemies", "waypoints", "ui"];

/// Only files with exactly this extension are picked up.
pub const PNG_EXTENSION: &str = "png";

/// Which directories a batch visits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Base asset directory the targets are resolved against
    pub base_dir: PathBuf,
    /// Subdirectories of `base_dir`, visited in order
    pub directories: Vec<String>,
}

impl BatchConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            directories: DEFAULT_TARGET_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn directories<I, S>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories = directories.into_iter().map(Into::into).collect();
        self
    }

    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.directories.iter().map(|d| self.base_dir.join(d)).collect()
    }
}

/// Result of stripping a single file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<StripStats>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub enum DirectoryOutcome {
    /// Directory does not exist, nothing was touched
    Missing(StripError),
    /// Directory exists but could not be listed
    Unreadable(StripError),
    /// One outcome per PNG found, in processing order
    Processed(Vec<FileOutcome>),
}

#[derive(Debug)]
pub struct DirectoryReport {
    pub path: PathBuf,
    pub outcome: DirectoryOutcome,
}

impl DirectoryReport {
    pub fn files(&self) -> &[FileOutcome] {
        match &self.outcome {
            DirectoryOutcome::Processed(files) => files.as_slice(),
            _ => &[],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.outcome, DirectoryOutcome::Missing(_))
    }

    pub fn succeeded(&self) -> usize {
        self.files().iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files().iter().filter(|f| !f.is_success()).count()
    }
}

/// Summary of a whole batch
#[derive(Debug, Default)]
pub struct BatchReport {
    pub directories: Vec<DirectoryReport>,
}

impl BatchReport {
    pub fn files_found(&self) -> usize {
        self.directories.iter().map(|d| d.files().len()).sum()
    }

    pub fn files_succeeded(&self) -> usize {
        self.directories.iter().map(DirectoryReport::succeeded).sum()
    }

    pub fn files_failed(&self) -> usize {
        self.directories.iter().map(DirectoryReport::failed).sum()
    }

    pub fn directories_missing(&self) -> usize {
        self.directories.iter().filter(|d| d.is_missing()).count()
    }

    pub fn directories_unreadable(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| matches!(d.outcome, DirectoryOutcome::Unreadable(_)))
            .count()
    }

    pub fn pixels_cleared(&self) -> u64 {
        self.directories
            .iter()
            .flat_map(|d| d.files())
            .filter_map(|f| f.result.as_ref().ok())
            .map(|stats| stats.cleared_pixels)
            .sum()
    }
}

/// Last path component for console output, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
