//! Decoding of a single raw input line into an integer sample.

use thiserror::Error;

/// Why a raw line could not be turned into an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("line is empty")]
    Empty,

    #[error("not an integer: {0:?}")]
    NotInteger(String),
}

/// Parse one line as a decimal `i64`, ignoring surrounding whitespace
/// (including a trailing `\r`).
///
/// ```
/// use counter_data::parser::parse_value;
///
/// assert_eq!(parse_value(b"  42\r"), Ok(42));
/// assert!(parse_value(b"1.2").is_err());
/// ```
pub fn parse_value(line: &[u8]) -> Result<i64, ParseValueError> {
    let text = std::str::from_utf8(line).map_err(|_| ParseValueError::NotUtf8)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseValueError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ParseValueError::NotInteger(trimmed.to_string()))
}
