//! Core types for the statistics counter.
//!
//! Holds the run trackers, the report model and its rendering, the error
//! type shared by every crate, and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod run_tracker;
pub mod settings;

pub use error::{Result, StatsError};
pub use models::{InvalidLinePolicy, Median, Report, TransportKind};
pub use run_tracker::{Direction, RunTracker};
