//! Single-pass aggregation of integer samples into a [`Report`].

use std::io;

use counter_core::error::{Result, StatsError};
use counter_core::models::{InvalidLinePolicy, Median, Report};
use counter_core::run_tracker::RunTracker;
use tracing::debug;

use crate::parser::parse_value;

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Running state of one scan.
///
/// Sum and count are kept incrementally and both run trackers see every
/// accepted sample in arrival order. Values are buffered for the final sort
/// that yields minimum, maximum and median.
#[derive(Debug, Clone)]
pub struct Aggregator {
    count: usize,
    sum: i128,
    values: Vec<i64>,
    skipped: usize,
    increase: RunTracker,
    decrease: RunTracker,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            values: Vec::new(),
            skipped: 0,
            increase: RunTracker::increasing(),
            decrease: RunTracker::decreasing(),
        }
    }

    /// Accept one sample.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
        self.sum += i128::from(value);
        self.count += 1;
        self.increase.feed(value);
        self.decrease.feed(value);
    }

    /// Record a line that was dropped in skip mode.
    pub fn note_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Longest increasing run so far.
    pub fn increase_run(&self) -> usize {
        self.increase.finalize()
    }

    /// Longest decreasing run so far.
    pub fn decrease_run(&self) -> usize {
        self.decrease.finalize()
    }

    /// Close the scan and build the report.
    ///
    /// Fails with [`StatsError::EmptyInput`] when no sample was pushed.
    pub fn finish(self) -> Result<Report> {
        let increase_run = self.increase.finalize();
        let decrease_run = self.decrease.finalize();

        let mut values = self.values;
        values.sort_unstable();

        let (Some(&minimum), Some(&maximum), Some(median)) =
            (values.first(), values.last(), Median::of_sorted(&values))
        else {
            return Err(StatsError::EmptyInput);
        };

        Ok(Report {
            maximum,
            minimum,
            average: self.sum as f64 / self.count as f64,
            median,
            increase_run,
            decrease_run,
            count: self.count,
            skipped_lines: self.skipped,
        })
    }

    /// Drive a whole scan over raw lines.
    ///
    /// Lines that fail to parse abort the scan under
    /// [`InvalidLinePolicy::Fail`] and are dropped under
    /// [`InvalidLinePolicy::Skip`]. An I/O error from `lines` always aborts.
    pub fn run<I>(lines: I, policy: InvalidLinePolicy) -> Result<Report>
    where
        I: IntoIterator<Item = io::Result<Vec<u8>>>,
    {
        let mut agg = Self::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            match parse_value(&line) {
                Ok(value) => agg.push(value),
                Err(e) => match policy {
                    InvalidLinePolicy::Fail => {
                        return Err(StatsError::Parse {
                            line: index + 1,
                            content: String::from_utf8_lossy(&line).into_owned(),
                        });
                    }
                    InvalidLinePolicy::Skip => {
                        debug!("Skipping line {}: {}", index + 1, e);
                        agg.note_skipped();
                    }
                },
            }
        }

        agg.finish()
    }

    /// Convenience wrapper over already-decoded integers.
    pub fn from_values<I>(values: I) -> Result<Report>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut agg = Self::new();
        for value in values {
            agg.push(value);
        }
        agg.finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
