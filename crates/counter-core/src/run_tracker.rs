use serde::{Deserialize, Serialize};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Which way a run has to move for a step to extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Each step must be strictly greater than the previous sample.
    Increase,
    /// Each step must be strictly smaller than the previous sample.
    Decrease,
}

impl Direction {
    /// `true` when moving from `prev` to `cur` continues a run.
    ///
    /// Anything else (a tie or a step the other way) restarts the run.
    pub fn continues(self, prev: i64, cur: i64) -> bool {
        match self {
            Direction::Increase => prev < cur,
            Direction::Decrease => prev > cur,
        }
    }
}

// ── RunTracker ────────────────────────────────────────────────────────────────

/// Incremental reducer that tracks the longest run of samples moving in one
/// [`Direction`].
///
/// Samples are fed one at a time in arrival order. A strict step in the
/// tracker's direction extends the current run; a tie or a reversal starts a
/// new run of length 1 at the current sample. The very first sample starts a
/// run of length 1.
///
/// ```
/// use counter_core::run_tracker::{Direction, RunTracker};
///
/// let mut tracker = RunTracker::new(Direction::Increase);
/// for v in [5, 1, 3, 4, 1] {
///     tracker.feed(v);
/// }
/// assert_eq!(tracker.finalize(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RunTracker {
    direction: Direction,
    previous: Option<i64>,
    current: usize,
    best: usize,
    samples: usize,
}

impl RunTracker {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            previous: None,
            current: 0,
            best: 0,
            samples: 0,
        }
    }

    /// Tracker for strictly increasing runs.
    pub fn increasing() -> Self {
        Self::new(Direction::Increase)
    }

    /// Tracker for strictly decreasing runs.
    pub fn decreasing() -> Self {
        Self::new(Direction::Decrease)
    }

    /// Fold one sample into the tracker.
    pub fn feed(&mut self, value: i64) {
        self.current = match self.previous {
            Some(prev) if self.direction.continues(prev, value) => self.current + 1,
            _ => 1,
        };
        self.best = self.best.max(self.current);
        self.previous = Some(value);
        self.samples += 1;
    }

    /// Length of the longest run seen so far, or 0 when nothing was fed.
    ///
    /// Does not touch the tracker's state; feeding may continue afterwards.
    pub fn finalize(&self) -> usize {
        if self.samples == 0 {
            0
        } else {
            self.best
        }
    }

    /// Best run length seen so far.
    pub fn best(&self) -> usize {
        self.best
    }

    /// Length of the run ending at the most recent sample.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
