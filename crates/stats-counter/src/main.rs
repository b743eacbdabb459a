mod bootstrap;

use std::time::Instant;

use anyhow::{Context, Result};
use counter_core::formatting::render;
use counter_core::settings::Settings;
use counter_data::analysis::{calculate_statistics, ScanOptions};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("stats-counter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Transport: {}, skip invalid: {}, format: {:?}",
        settings.transport,
        settings.skip,
        settings.format
    );

    let output = run(&settings)?;
    print!("{}", output);

    Ok(())
}

/// Scan the configured file and render the report.
///
/// The timer covers the scan only, not the rendering.
fn run(settings: &Settings) -> Result<String> {
    let start = Instant::now();

    let report = calculate_statistics(&settings.filename, ScanOptions::from(settings))
        .with_context(|| {
            format!(
                "Occur unexpected error while processing {}",
                settings.filename.display()
            )
        })?;

    let elapsed = start.elapsed();
    tracing::info!("Scan finished in {:.3}s", elapsed.as_secs_f64());

    render(&report, settings.format, settings.show_time.then_some(elapsed))
        .context("Failed to render report")
}
