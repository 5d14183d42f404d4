//! Public holiday values and the holiday set used for working-day counting.

use super::CalendarError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// ISO 3166-1 alpha-2 country code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a validated country code.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCountryCode`] unless the trimmed value
    /// is exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, CalendarError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CalendarError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date of the holiday.
    pub date: NaiveDate,
    /// Display name.
    pub name: String,
}

impl Holiday {
    /// Creates a holiday record.
    #[must_use]
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Dates excluded from working-day counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    /// Creates an empty holiday set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the date is a holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Adds a single date.
    pub fn insert(&mut self, date: NaiveDate) {
        self.0.insert(date);
    }

    /// Number of distinct holiday dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no holidays are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the holiday dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = &'a Holiday>>(iter: I) -> Self {
        iter.into_iter().map(|holiday| holiday.date).collect()
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
