//! Error types for calendar construction and date arithmetic.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by calendar domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Every day of the week is configured as a weekend day.
    #[error("weekend covers the whole week, no working days remain")]
    NoWorkingDays,

    /// The country code is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code '{0}', expected two ASCII letters")]
    InvalidCountryCode(String),

    /// Advancing from the given date ran past the representable range.
    #[error("date arithmetic overflowed after {0}")]
    DateOutOfRange(NaiveDate),
}
