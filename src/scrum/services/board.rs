//! Service layer for board seeding and task edits.

use crate::scrum::{
    domain::{
        Department, JobNumber, NewTask, PlannedDuration, ProgressSummary, ScrumBoard,
        ScrumDomainError, ScrumTask, StaffId, TaskId, TaskStatus, TemplateCatalog,
        similar_projects,
    },
    ports::{BoardStoreError, ProjectDirectory, ProjectDirectoryError, ScrumBoardStore},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Partial update applied to one task.
///
/// Fields left untouched keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    assignee: Option<Option<StaffId>>,
    department: Option<Department>,
    planned_duration: Option<PlannedDuration>,
    due_date: Option<Option<NaiveDate>>,
    status: Option<TaskStatus>,
}

impl TaskEdit {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the task to a staff member.
    #[must_use]
    pub const fn assign_to(mut self, assignee: StaffId) -> Self {
        self.assignee = Some(Some(assignee));
        self
    }

    /// Removes the assignee.
    #[must_use]
    pub const fn unassign(mut self) -> Self {
        self.assignee = Some(None);
        self
    }

    /// Moves the task to another department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<Department>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Requests a planned duration.
    #[must_use]
    pub const fn with_planned_duration(mut self, duration: PlannedDuration) -> Self {
        self.planned_duration = Some(duration);
        self
    }

    /// Sets the due date by hand.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Moves the task to another column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Result of [`TaskBoardService::edit_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The task after the edit.
    pub task: ScrumTask,
    /// `true` when the requested duration was raised to the template minimum.
    pub duration_clamped: bool,
}

/// Result of [`TaskBoardService::add_task_to_similar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarTaskOutcome {
    /// The task added to the requested project.
    pub task: ScrumTask,
    /// Copies added to projects of the same type, in directory order.
    pub copies: Vec<(JobNumber, ScrumTask)>,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The project already has a board.
    #[error("job {0} already has a scrum board")]
    BoardAlreadyExists(JobNumber),
    /// No board is stored for the project.
    #[error("no scrum board for job {0}")]
    BoardNotFound(JobNumber),
    /// The board has no task with this id.
    #[error("job {job_no} has no task {task_id}")]
    TaskNotFound {
        /// Project searched.
        job_no: JobNumber,
        /// Missing task.
        task_id: TaskId,
    },
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ScrumDomainError),
    /// Board persistence failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// Projects could not be listed.
    #[error(transparent)]
    Projects(#[from] ProjectDirectoryError),
}

/// Result type for board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<B, P, K>
where
    B: ScrumBoardStore,
    P: ProjectDirectory,
    K: Clock + Send + Sync,
{
    store: Arc<B>,
    projects: Arc<P>,
    clock: Arc<K>,
    catalog: Arc<TemplateCatalog>,
}

impl<B, P, K> TaskBoardService<B, P, K>
where
    B: ScrumBoardStore,
    P: ProjectDirectory,
    K: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(
        store: Arc<B>,
        projects: Arc<P>,
        clock: Arc<K>,
        catalog: Arc<TemplateCatalog>,
    ) -> Self {
        Self {
            store,
            projects,
            clock,
            catalog,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    async fn require_board(&self, job_no: &JobNumber) -> TaskBoardResult<ScrumBoard> {
        self.store
            .load_board(job_no)
            .await?
            .ok_or_else(|| TaskBoardError::BoardNotFound(job_no.clone()))
    }

    /// Creates a project board holding one `Up Next` task per template.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardAlreadyExists`] when the project has a
    /// board, or [`TaskBoardError::Store`] when persistence fails.
    pub async fn seed_board(&self, job_no: &JobNumber) -> TaskBoardResult<ScrumBoard> {
        if self.store.load_board(job_no).await?.is_some() {
            return Err(TaskBoardError::BoardAlreadyExists(job_no.clone()));
        }
        let tasks = self.catalog.instantiate_all(self.today())?;
        let board = ScrumBoard::with_tasks(job_no.clone(), tasks);
        self.store.save_board(&board).await?;
        info!(%job_no, tasks = board.len(), "seeded scrum board");
        Ok(board)
    }

    /// Adds a custom task, creating the board when the project has none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an invalid task or
    /// [`TaskBoardError::Store`] when persistence fails.
    pub async fn add_task(&self, job_no: &JobNumber, request: NewTask) -> TaskBoardResult<ScrumTask> {
        let task = self.append_task(job_no, request, self.today()).await?;
        debug!(%job_no, task_id = %task.id(), "added task");
        Ok(task)
    }

    /// Adds a custom task to a project and to every other project of the
    /// same type.
    ///
    /// Each board allocates its own id for the task and is created when
    /// missing. A project without a type gets the task on its own board
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an invalid task,
    /// [`TaskBoardError::Projects`] when projects cannot be listed, or
    /// [`TaskBoardError::Store`] when persistence fails. Boards saved before
    /// a store failure keep the task.
    pub async fn add_task_to_similar(
        &self,
        job_no: &JobNumber,
        request: NewTask,
    ) -> TaskBoardResult<SimilarTaskOutcome> {
        let today = self.today();
        let siblings = similar_projects(&self.projects.list_projects().await?, job_no);
        let task = self.append_task(job_no, request.clone(), today).await?;
        let mut copies = Vec::with_capacity(siblings.len());
        for sibling in siblings {
            let copy = self.append_task(&sibling, request.clone(), today).await?;
            copies.push((sibling, copy));
        }
        info!(
            %job_no,
            task_id = %task.id(),
            projects = copies.len() + 1,
            "added task to similar projects"
        );
        Ok(SimilarTaskOutcome { task, copies })
    }

    async fn append_task(
        &self,
        job_no: &JobNumber,
        request: NewTask,
        today: NaiveDate,
    ) -> TaskBoardResult<ScrumTask> {
        let mut board = self
            .store
            .load_board(job_no)
            .await?
            .unwrap_or_else(|| ScrumBoard::new(job_no.clone()));
        let task = board.add_task(request, today)?;
        self.store.save_board(&board).await?;
        Ok(task)
    }

    /// Moves a task to another column.
    ///
    /// Returns `false`, without writing, when the task already has the status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardNotFound`] or
    /// [`TaskBoardError::TaskNotFound`] for unknown targets and
    /// [`TaskBoardError::Store`] when persistence fails.
    pub async fn update_status(
        &self,
        job_no: &JobNumber,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskBoardResult<bool> {
        let today = self.today();
        let mut board = self.require_board(job_no).await?;
        let task = board
            .task_mut(task_id)
            .ok_or_else(|| task_not_found(job_no, task_id))?;
        if !task.transition_to(status, today) {
            return Ok(false);
        }
        self.store.save_board(&board).await?;
        debug!(%job_no, %task_id, status = %status, "moved task");
        Ok(true)
    }

    /// Applies a partial edit to a task.
    ///
    /// A requested duration shorter than the task template's fixed minimum
    /// is raised to that minimum and reported in the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardNotFound`] or
    /// [`TaskBoardError::TaskNotFound`] for unknown targets and
    /// [`TaskBoardError::Store`] when persistence fails.
    pub async fn edit_task(
        &self,
        job_no: &JobNumber,
        task_id: TaskId,
        edit: TaskEdit,
    ) -> TaskBoardResult<EditOutcome> {
        let today = self.today();
        let minimum = self.catalog.minimum_duration(task_id);
        let mut board = self.require_board(job_no).await?;
        let task = board
            .task_mut(task_id)
            .ok_or_else(|| task_not_found(job_no, task_id))?;

        if let Some(assignee) = edit.assignee {
            task.assign(assignee);
        }
        if let Some(department) = edit.department {
            task.set_department(department);
        }
        let mut duration_clamped = false;
        if let Some(requested) = edit.planned_duration {
            duration_clamped = requested < minimum;
            if duration_clamped {
                info!(
                    %job_no,
                    %task_id,
                    requested = requested.days(),
                    minimum = minimum.days(),
                    "raised planned duration to template minimum"
                );
            }
            task.set_planned_duration(requested.max(minimum));
        }
        if let Some(due_date) = edit.due_date {
            task.set_due_date(due_date);
        }
        if let Some(status) = edit.status {
            task.transition_to(status, today);
        }

        let edited = task.clone();
        self.store.save_board(&board).await?;
        Ok(EditOutcome {
            task: edited,
            duration_clamped,
        })
    }

    /// Deletes a task and every dependency reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardNotFound`] or
    /// [`TaskBoardError::TaskNotFound`] for unknown targets and
    /// [`TaskBoardError::Store`] when persistence fails.
    pub async fn delete_task(&self, job_no: &JobNumber, task_id: TaskId) -> TaskBoardResult<ScrumTask> {
        let mut board = self.require_board(job_no).await?;
        let removed = board
            .remove_task(task_id)
            .ok_or_else(|| task_not_found(job_no, task_id))?;
        self.store.save_board(&board).await?;
        debug!(%job_no, %task_id, "deleted task");
        Ok(removed)
    }

    /// Completion progress of a project, by department.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardNotFound`] when the project has no
    /// board, or [`TaskBoardError::Store`] when loading fails.
    pub async fn progress(&self, job_no: &JobNumber) -> TaskBoardResult<ProgressSummary> {
        let board = self.require_board(job_no).await?;
        Ok(ProgressSummary::from_tasks(board.tasks()))
    }

    /// Distinct departments on a project board, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::BoardNotFound`] when the project has no
    /// board, or [`TaskBoardError::Store`] when loading fails.
    pub async fn departments(&self, job_no: &JobNumber) -> TaskBoardResult<Vec<Department>> {
        let board = self.require_board(job_no).await?;
        Ok(board.departments())
    }
}

fn task_not_found(job_no: &JobNumber, task_id: TaskId) -> TaskBoardError {
    TaskBoardError::TaskNotFound {
        job_no: job_no.clone(),
        task_id,
    }
}
