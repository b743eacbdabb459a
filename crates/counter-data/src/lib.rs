//! Data ingestion layer for the statistics counter.
//!
//! Responsible for reading (and decompressing) input files line by line,
//! decoding lines into integers, folding them through the single-pass
//! aggregator and running the top-level scan pipeline.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod reader;

pub use counter_core as core;
