use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while computing statistics over an input file.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The input file could not be opened.
    #[error("Cant open such file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not hold a valid integer and skip mode is disabled.
    #[error("Cant process given value {content:?} on line {line}")]
    Parse { line: usize, content: String },

    /// The input yielded no valid integers at all.
    #[error("empty file: no integer values found")]
    EmptyInput,

    /// Reading or decompressing the stream failed part-way through.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the counter crates.
pub type Result<T> = std::result::Result<T, StatsError>;
