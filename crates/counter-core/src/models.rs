use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// How the bytes of an input file are transported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Detect from the leading magic bytes of the stream.
    #[default]
    Auto,
    /// Uncompressed text.
    Plain,
    /// bzip2 container (one or more concatenated streams).
    Bzip2,
    /// Zstandard frame(s).
    Zstd,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Plain => "plain",
            Self::Bzip2 => "bzip2",
            Self::Zstd => "zstd",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a line that is not a valid integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinePolicy {
    /// Abort the scan with a parse error.
    #[default]
    Fail,
    /// Drop the line and keep scanning.
    Skip,
}

/// Median of a sorted, non-empty sequence of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Median {
    /// Odd count: the middle element itself.
    Middle(i64),
    /// Even count: mean of the two central elements `(lower, upper)`.
    Between(i64, i64),
}

impl Median {
    /// Median of an ascending-sorted slice. Returns `None` for an empty slice.
    pub fn of_sorted(sorted: &[i64]) -> Option<Self> {
        let len = sorted.len();
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        if len % 2 == 0 {
            Some(Median::Between(sorted[mid - 1], sorted[mid]))
        } else {
            Some(Median::Middle(sorted[mid]))
        }
    }

    /// Numeric value; may be non-integral for [`Median::Between`].
    ///
    /// Rounds to the nearest `f64` for magnitudes above 2^53; use the
    /// `Display` form for the exact value.
    pub fn value(&self) -> f64 {
        match *self {
            Median::Middle(v) => v as f64,
            Median::Between(lo, hi) => (lo as i128 + hi as i128) as f64 / 2.0,
        }
    }
}

/// Exact decimal rendering of `sum / 2`: always ends in `.0` or `.5`.
fn write_half(f: &mut fmt::Formatter<'_>, sum: i128) -> fmt::Result {
    let whole = sum.div_euclid(2);
    if sum.rem_euclid(2) == 0 {
        write!(f, "{}.0", whole)
    } else if whole >= 0 {
        write!(f, "{}.5", whole)
    } else {
        // floor(-7 / 2) = -4, and -4 + 0.5 = -3.5
        write!(f, "-{}.5", -(whole + 1))
    }
}

/// Odd counts print as the plain integer, even counts as a float with one
/// decimal (`5.0`, `2.5`).
impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Middle(v) => write!(f, "{}", v),
            Median::Between(lo, hi) => write_half(f, *lo as i128 + *hi as i128),
        }
    }
}

impl Serialize for Median {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Median::Middle(v) => serializer.serialize_i64(v),
            Median::Between(..) => serializer.serialize_f64(self.value()),
        }
    }
}

/// Result of one full scan over an input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub maximum: i64,
    pub minimum: i64,
    /// Arithmetic mean of all accepted values.
    pub average: f64,
    pub median: Median,
    /// Longest run of strictly increasing consecutive values.
    pub increase_run: usize,
    /// Longest run of strictly decreasing consecutive values.
    pub decrease_run: usize,
    /// Number of values that made it into the statistics.
    pub count: usize,
    /// Lines dropped because they were not valid integers (skip mode only).
    pub skipped_lines: usize,
}
