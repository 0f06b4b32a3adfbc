//! Validation of progress values coming from flags or query strings.

use std::fmt;

/// Largest accepted progress value. Each 0.5 adds one arc, so this bounds the
/// work a single request can ask for.
pub const MAX_PROGRESS: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressError {
    NotANumber(String),
    OutOfRange(f32),
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressError::NotANumber(raw) => write!(f, "`{raw}` is not a decimal number"),
            ProgressError::OutOfRange(v) => write!(f, "{v} is outside 0..={MAX_PROGRESS}"),
        }
    }
}

impl std::error::Error for ProgressError {}

/// Parses a decimal progress value in `0..=MAX_PROGRESS`.
pub fn parse_progress(raw: &str) -> Result<f32, ProgressError> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ProgressError::NotANumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(ProgressError::NotANumber(raw.to_string()));
    }
    if !(0.0..=MAX_PROGRESS).contains(&value) {
        return Err(ProgressError::OutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(parse_progress("0.25"), Ok(0.25));
        assert_eq!(parse_progress("2"), Ok(2.0));
        assert_eq!(parse_progress("1e-1"), Ok(0.1));
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert!(matches!(parse_progress(""), Err(ProgressError::NotANumber(_))));
        assert!(matches!(parse_progress("half"), Err(ProgressError::NotANumber(_))));
        assert!(matches!(parse_progress("inf"), Err(ProgressError::NotANumber(_))));
        assert!(matches!(parse_progress("NaN"), Err(ProgressError::NotANumber(_))));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_progress("-0.5"), Err(ProgressError::OutOfRange(-0.5)));
        assert_eq!(parse_progress("1000.5"), Err(ProgressError::OutOfRange(1000.5)));
    }
}
