use asset_bg_strip::image_pipeline::{BatchConfig, BatchDriver, StripConfig, TracingObserver};
use asset_bg_strip::logger;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let base_dir = std::env::current_dir()
        .context("Failed to resolve working directory")?
        .join("assets");

    let driver = BatchDriver::new(BatchConfig::new(base_dir), StripConfig::default());

    info!("Asset directory: {}", driver.config().base_dir.display());
    info!("Light threshold: {}", driver.pipeline().config().light_threshold);

    // Failures are reported per file; they never change the exit status
    driver.run(&TracingObserver);

    Ok(())
}
