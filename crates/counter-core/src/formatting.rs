//! Human- and machine-readable rendering of a [`Report`].

use std::fmt::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Report;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Six labelled lines, one statistic each.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Render `report` in the requested format.
///
/// `elapsed` is appended as the execution time when present.
pub fn render(
    report: &Report,
    format: OutputFormat,
    elapsed: Option<Duration>,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, elapsed)),
        OutputFormat::Json => render_json(report, elapsed),
    }
}

/// Render the fixed six-line text report.
///
/// # Examples
///
/// ```
/// use counter_core::formatting::render_text;
/// use counter_core::models::{Median, Report};
///
/// let report = Report {
///     maximum: 1,
///     minimum: 1,
///     average: 1.0,
///     median: Median::Middle(1),
///     increase_run: 1,
///     decrease_run: 1,
///     count: 1,
///     skipped_lines: 0,
/// };
/// assert!(render_text(&report, None).starts_with("Maximum value: 1\n"));
/// ```
pub fn render_text(report: &Report, elapsed: Option<Duration>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Maximum value: {}", report.maximum);
    let _ = writeln!(out, "Minimum value: {}", report.minimum);
    let _ = writeln!(out, "Average: {:.3}", report.average);
    let _ = writeln!(out, "Mediana: {}", report.median);
    let _ = writeln!(out, "Sequence that increase: {}", report.increase_run);
    let _ = writeln!(out, "Sequence that decrease: {}", report.decrease_run);
    if let Some(elapsed) = elapsed {
        let _ = writeln!(out, "Execution time is {}", format_seconds(elapsed));
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_time_secs: Option<f64>,
}

/// Render the report as a pretty-printed JSON object.
pub fn render_json(report: &Report, elapsed: Option<Duration>) -> serde_json::Result<String> {
    let doc = JsonReport {
        report,
        execution_time_secs: elapsed.map(|d| d.as_secs_f64()),
    };
    let mut json = serde_json::to_string_pretty(&doc)?;
    json.push('\n');
    Ok(json)
}

/// Seconds with three decimals, e.g. `"0.042"`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
