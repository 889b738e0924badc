use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{StripError, Result},
    classify::{StripConfig, StripStats},
    png::{ImageReader, ImageWriter, PngReader, PngWriter},
};

pub struct BackgroundStripPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: StripConfig,
}

impl BackgroundStripPipeline<PngReader, PngWriter> {
    pub fn new(config: StripConfig) -> Self {
        Self {
            reader: PngReader,
            writer: PngWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> BackgroundStripPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: StripConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<StripStats> {
        let mut image = {
            let _span = tracing::info_span!("decode_png").entered();
            self.reader.read_rgba(input_data)?
        };

        let stats = {
            let _span = tracing::info_span!("strip_background",
                width = image.width(),
                height = image.height()
            ).entered();
            self.config.strip_image(&mut image)
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_rgba(&image, output)?;
        }

        info!(
            width = stats.width,
            height = stats.height,
            cleared = stats.cleared_pixels,
            "Background stripped"
        );
        Ok(stats)
    }

    /// Strips one file. `input_path` and `output_path` may be the same file.
    ///
    /// The output is fully encoded in memory before the output file is opened,
    /// so a file that fails to decode or encode is left as it was.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<StripStats> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Stripping file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                StripError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let stats = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                StripError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(stats)
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StripConfig) {
        self.config = config;
    }
}
