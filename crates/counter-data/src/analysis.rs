//! Top-level scan pipeline: open the input, stream it through the
//! [`Aggregator`], and hand back a [`Report`].

use std::path::Path;

use counter_core::error::Result;
use counter_core::models::{InvalidLinePolicy, Report, TransportKind};
use counter_core::settings::Settings;
use tracing::{debug, info, warn};

use crate::aggregator::Aggregator;
use crate::reader::LineSource;

/// Options for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub transport: TransportKind,
    pub invalid_lines: InvalidLinePolicy,
}

impl From<&Settings> for ScanOptions {
    fn from(s: &Settings) -> Self {
        Self {
            transport: s.transport,
            invalid_lines: s.invalid_line_policy(),
        }
    }
}

/// Compute all statistics for the file at `path`.
///
/// The file is read exactly once and closed before this returns, whether the
/// scan succeeds or fails.
pub fn calculate_statistics(path: &Path, options: ScanOptions) -> Result<Report> {
    info!("Scanning {}", path.display());

    let source = LineSource::open(path, options.transport)?;
    let transport = source.transport();
    let report = Aggregator::run(source, options.invalid_lines)?;

    if report.skipped_lines > 0 {
        warn!(
            "Skipped {} invalid line(s) in {}",
            report.skipped_lines,
            path.display()
        );
    }
    debug!(
        "File {} ({}): {} values, {} skipped",
        path.display(),
        transport,
        report.count,
        report.skipped_lines,
    );

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
