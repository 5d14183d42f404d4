//! Identifier and validated scalar types for the scrum domain.

use super::ScrumDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task identifier, unique within one project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw task number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Staff member identifier from the staff directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(u64);

impl StaffId {
    /// Wraps a raw staff number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project job number, for example `RRC/2025/001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobNumber(String);

impl JobNumber {
    /// Creates a validated job number.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::InvalidJobNumber`] when the value is empty
    /// after trimming or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ScrumDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ScrumDomainError::InvalidJobNumber(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the job number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobNumber {
    type Error = ScrumDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobNumber> for String {
    fn from(job_no: JobNumber) -> Self {
        job_no.0
    }
}

impl AsRef<str> for JobNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JobNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Department tag used to group and colour tasks.
///
/// Blank names normalize to [`Department::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Department(String);

impl Department {
    /// Name used for tasks without a department.
    pub const DEFAULT: &'static str = "Default";

    /// Creates a department tag.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_owned())
    }

    /// Returns the department name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Department {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Department> for String {
    fn from(department: Department) -> Self {
        department.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
