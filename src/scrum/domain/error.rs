//! Error types for scrum domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing scrum domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScrumDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A planned duration of zero working days was supplied.
    #[error("planned duration must be at least one working day")]
    ZeroDuration,

    /// Two tasks on one board share an id.
    #[error("task id {0} appears more than once on the board")]
    DuplicateTaskId(TaskId),

    /// The job number is empty or contains whitespace.
    #[error("invalid job number '{0}'")]
    InvalidJobNumber(String),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
