use clap::Parser;
use std::path::PathBuf;

use crate::formatting::OutputFormat;
use crate::models::{InvalidLinePolicy, TransportKind};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Find the maximum and minimum number in a file of integers, the median, the
/// arithmetic mean, and the longest increasing and decreasing sequences.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "stats-counter",
    about = "Streaming statistics over a file of integers, one per line",
    version
)]
pub struct Settings {
    /// File with one integer per line (plain text, bzip2 or zstd)
    pub filename: PathBuf,

    /// Show execution time
    #[arg(long = "show_time", visible_aliases = ["show-time", "st"])]
    pub show_time: bool,

    /// Skip lines that are not valid integers instead of failing
    #[arg(short, long)]
    pub skip: bool,

    /// How the input file is encoded
    #[arg(long, value_enum, default_value_t = TransportKind::Auto)]
    pub transport: TransportKind,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(
        long,
        env = "STATS_COUNTER_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::parse().resolve()
    }

    /// Same as [`Settings::load`] but over an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args).resolve()
    }

    /// Apply the `--debug` flag.
    pub fn resolve(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    /// Policy for lines that are not valid integers.
    pub fn invalid_line_policy(&self) -> InvalidLinePolicy {
        if self.skip {
            InvalidLinePolicy::Skip
        } else {
            InvalidLinePolicy::Fail
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
