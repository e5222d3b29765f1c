//! Duration expression parsing.
//!
//! Expressions are concatenated `<number><unit>` spans such as `1h2m3s`,
//! `90s` or `1h 30m`. Supported units follow the humantime grammar
//! (`ns`, `us`, `ms`, `s`, `m`/`min`, `h`, `d`, ...).

use std::time::Duration;
use thiserror::Error;

/// Error returned when a duration expression cannot be parsed.
#[derive(Debug, PartialEq, Error)]
pub enum DurationError {
    /// The expression is empty or whitespace only.
    #[error("duration expression is empty")]
    Empty,
    /// The expression does not follow the `<number><unit>` grammar.
    #[error("{0}")]
    Malformed(#[from] humantime::DurationError),
}

/// Parse a duration expression like `1h2m3s`.
pub fn parse_duration(expr: &str) -> Result<Duration, DurationError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(DurationError::Empty);
    }
    Ok(humantime::parse_duration(expr)?)
}

/// Parse a duration expression, yielding zero for empty or malformed input.
pub fn parse_duration_or_zero(expr: &str) -> Duration {
    parse_duration(expr).unwrap_or(Duration::ZERO)
}

/// Format a duration in the same grammar [`parse_duration`] accepts.
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}
