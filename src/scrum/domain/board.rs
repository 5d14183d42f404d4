//! Project scrum board: the task collection of one project.

use super::{
    Department, JobNumber, PlannedDuration, ScrumDomainError, ScrumTask, StaffId, TaskId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Ids up to this value are reserved for template tasks.
pub const CUSTOM_TASK_ID_FLOOR: u64 = 999;

/// Request payload for adding a custom task to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: String,
    department: Department,
    assignee: Option<StaffId>,
    due_date: Option<NaiveDate>,
    planned_duration: PlannedDuration,
    dependencies: Vec<TaskId>,
}

impl NewTask {
    /// Creates a one-day, unassigned task request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: Department::default(),
            assignee: None,
            due_date: None,
            planned_duration: PlannedDuration::ONE,
            dependencies: Vec::new(),
        }
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<Department>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: StaffId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets an initial due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the planned duration.
    #[must_use]
    pub fn with_planned_duration(mut self, duration: PlannedDuration) -> Self {
        self.planned_duration = duration;
        self
    }

    /// Sets the dependencies.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }
}

/// All design tasks of one project.
///
/// Deserialization rejects boards that repeat a task id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct ScrumBoard {
    job_no: JobNumber,
    tasks: Vec<ScrumTask>,
}

#[derive(Deserialize)]
struct BoardRecord {
    job_no: JobNumber,
    #[serde(default)]
    tasks: Vec<ScrumTask>,
}

impl TryFrom<BoardRecord> for ScrumBoard {
    type Error = ScrumDomainError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(record.tasks.len());
        if let Some(duplicate) = record
            .tasks
            .iter()
            .map(ScrumTask::id)
            .find(|id| !seen.insert(*id))
        {
            return Err(ScrumDomainError::DuplicateTaskId(duplicate));
        }
        Ok(Self::with_tasks(record.job_no, record.tasks))
    }
}

impl ScrumBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new(job_no: JobNumber) -> Self {
        Self {
            job_no,
            tasks: Vec::new(),
        }
    }

    /// Creates a board holding the given tasks.
    #[must_use]
    pub const fn with_tasks(job_no: JobNumber, tasks: Vec<ScrumTask>) -> Self {
        Self { job_no, tasks }
    }

    /// Returns the project job number.
    #[must_use]
    pub const fn job_no(&self) -> &JobNumber {
        &self.job_no
    }

    /// Returns the tasks in board order.
    #[must_use]
    pub fn tasks(&self) -> &[ScrumTask] {
        &self.tasks
    }

    /// Finds a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&ScrumTask> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by id for mutation.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut ScrumTask> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Id for the next custom task: one above the highest id, never below
    /// 1000.
    #[must_use]
    pub fn next_task_id(&self) -> TaskId {
        let highest = self
            .tasks
            .iter()
            .map(|task| task.id().value())
            .fold(CUSTOM_TASK_ID_FLOOR, u64::max);
        TaskId::new(highest.saturating_add(1))
    }

    /// Appends a custom `Up Next` task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::EmptyTaskName`] for a blank name.
    pub fn add_task(
        &mut self,
        request: NewTask,
        today: NaiveDate,
    ) -> Result<ScrumTask, ScrumDomainError> {
        let mut task = ScrumTask::new(self.next_task_id(), request.name, request.planned_duration)?
            .with_department(request.department)
            .with_dependencies(request.dependencies)
            .with_date_added(today);
        task.assign(request.assignee);
        task.set_due_date(request.due_date);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes a task and every dependency reference to it.
    pub fn remove_task(&mut self, id: TaskId) -> Option<ScrumTask> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        let removed = self.tasks.remove(position);
        for task in &mut self.tasks {
            task.remove_dependency(id);
        }
        Some(removed)
    }

    /// Distinct departments on the board, sorted by name.
    #[must_use]
    pub fn departments(&self) -> Vec<Department> {
        self.tasks
            .iter()
            .map(|task| task.department().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
