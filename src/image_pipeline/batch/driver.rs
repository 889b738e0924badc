use tracing::{info, instrument};

use crate::image_pipeline::batch::observer::ProgressObserver;
use crate::image_pipeline::batch::types::{BatchConfig, BatchReport};
use crate::image_pipeline::batch::walker::DirectoryWalker;
use crate::image_pipeline::classify::StripConfig;
use crate::image_pipeline::conversions::BackgroundStripPipeline;
use crate::image_pipeline::png::{ImageReader, ImageWriter, PngReader, PngWriter};

/// Runs the stripper over every configured asset directory, in order.
pub struct BatchDriver<R: ImageReader, W: ImageWriter> {
    pipeline: BackgroundStripPipeline<R, W>,
    config: BatchConfig,
}

impl BatchDriver<PngReader, PngWriter> {
    pub fn new(config: BatchConfig, strip_config: StripConfig) -> Self {
        Self {
            pipeline: BackgroundStripPipeline::new(strip_config),
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> BatchDriver<R, W> {
    pub fn with_pipeline(pipeline: BackgroundStripPipeline<R, W>, config: BatchConfig) -> Self {
        Self { pipeline, config }
    }

    /// Always runs to completion; per-file and per-directory failures end up in the report.
    #[instrument(skip(self, observer), fields(base = %self.config.base_dir.display()))]
    pub fn run(&self, observer: &dyn ProgressObserver) -> BatchReport {
        observer.batch_started();

        let walker = DirectoryWalker::new(&self.pipeline, observer);
        let report = BatchReport {
            directories: self
                .config
                .target_paths()
                .iter()
                .map(|dir| walker.walk(dir))
                .collect(),
        };

        info!(
            found = report.files_found(),
            cleared = report.pixels_cleared(),
            "Batch complete"
        );
        observer.batch_finished(&report);
        report
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &BackgroundStripPipeline<R, W> {
        &self.pipeline
    }
}
