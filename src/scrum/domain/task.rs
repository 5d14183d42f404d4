//! Design task entity and its lifecycle status.

use super::{Department, ParseTaskStatusError, ScrumDomainError, StaffId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Queued for a future sprint.
    #[serde(rename = "Up Next")]
    UpNext,
    /// Planned for the current sprint.
    #[serde(rename = "To Do")]
    ToDo,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished; never rescheduled.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Every status in board column order.
    pub const ALL: [Self; 4] = [Self::UpNext, Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpNext => "Up Next",
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Accepts any label that matches a status once case, spaces, `_` and
    /// `-` are ignored, e.g. `"in_progress"` or `"UP NEXT"`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let wanted = status_key(value);
        Self::ALL
            .into_iter()
            .find(|status| status_key(status.as_str()) == wanted)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

fn status_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of working days a task needs; never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlannedDuration(u32);

impl PlannedDuration {
    /// One working day.
    pub const ONE: Self = Self(1);

    /// Creates a validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::ZeroDuration`] for zero.
    pub const fn new(days: u32) -> Result<Self, ScrumDomainError> {
        if days == 0 {
            return Err(ScrumDomainError::ZeroDuration);
        }
        Ok(Self(days))
    }

    /// Returns the number of working days.
    #[must_use]
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl Default for PlannedDuration {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for PlannedDuration {
    type Error = ScrumDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlannedDuration> for u32 {
    fn from(duration: PlannedDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for PlannedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

/// A design task on a project's scrum board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrumTask {
    id: TaskId,
    name: String,
    status: TaskStatus,
    #[serde(default)]
    assignee: Option<StaffId>,
    #[serde(default)]
    department: Department,
    #[serde(default)]
    planned_duration: PlannedDuration,
    #[serde(default)]
    dependencies: Vec<TaskId>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    completed_date: Option<NaiveDate>,
    #[serde(default)]
    date_added: Option<NaiveDate>,
}

impl ScrumTask {
    /// Creates an unassigned `Up Next` task in the default department.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::EmptyTaskName`] when the name is blank.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        planned_duration: PlannedDuration,
    ) -> Result<Self, ScrumDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScrumDomainError::EmptyTaskName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            status: TaskStatus::UpNext,
            assignee: None,
            department: Department::default(),
            planned_duration,
            dependencies: Vec::new(),
            due_date: None,
            start_date: None,
            completed_date: None,
            date_added: None,
        })
    }

    /// Sets the status without touching lifecycle dates.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: StaffId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<Department>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the dependencies, dropping duplicates while keeping order.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies.clear();
        for dependency in dependencies {
            if !self.dependencies.contains(&dependency) {
                self.dependencies.push(dependency);
            }
        }
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Records the date the task was added to its board.
    #[must_use]
    pub fn with_date_added(mut self, date_added: NaiveDate) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<StaffId> {
        self.assignee
    }

    /// Returns the department tag.
    #[must_use]
    pub const fn department(&self) -> &Department {
        &self.department
    }

    /// Returns the planned duration.
    #[must_use]
    pub const fn planned_duration(&self) -> PlannedDuration {
        self.planned_duration
    }

    /// Returns the ids this task depends on.
    #[must_use]
    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    /// Returns the due date, if scheduled.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the date work started.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the date the task was completed.
    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Returns the date the task was added.
    #[must_use]
    pub const fn date_added(&self) -> Option<NaiveDate> {
        self.date_added
    }

    /// Moves the task to a new column and stamps lifecycle dates.
    ///
    /// Entering `In Progress` sets the start date unless one exists,
    /// entering `Done` sets the completion date, and leaving `Done` clears
    /// it. Returns `false` without changes when the status is unchanged.
    pub fn transition_to(&mut self, status: TaskStatus, today: NaiveDate) -> bool {
        if self.status == status {
            return false;
        }
        let previous = self.status;
        self.status = status;
        if status == TaskStatus::InProgress && self.start_date.is_none() {
            self.start_date = Some(today);
        }
        if status.is_done() {
            self.completed_date = Some(today);
        } else if previous.is_done() {
            self.completed_date = None;
        }
        true
    }

    /// Reassigns the task; `None` unassigns it.
    pub const fn assign(&mut self, assignee: Option<StaffId>) {
        self.assignee = assignee;
    }

    /// Changes the department.
    pub fn set_department(&mut self, department: Department) {
        self.department = department;
    }

    /// Changes the planned duration.
    pub const fn set_planned_duration(&mut self, duration: PlannedDuration) {
        self.planned_duration = duration;
    }

    /// Overwrites the due date.
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Drops a dependency reference. Returns `true` if it was present.
    pub fn remove_dependency(&mut self, dependency: TaskId) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|id| *id != dependency);
        self.dependencies.len() != before
    }
}
