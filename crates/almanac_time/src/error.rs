//! Error types for time conversions.

use thiserror::Error;

/// Errors from parsing or converting instants.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string is not a recognised date or date-time.
    #[error("unrecognised date/time: '{0}'")]
    Parse(String),
    /// Julian Date is NaN, infinite, or outside the representable calendar.
    #[error("Julian Date {0} cannot be represented as a calendar instant")]
    OutOfRange(f64),
}
