//! Shared world state for equalize scheduling BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, StubHolidaySource, date};
use chrono::NaiveDate;
use palladio::calendar::{
    adapters::memory::InMemoryHolidayCache,
    domain::{CountryCode, Holiday, Weekend},
    services::HolidayService,
};
use palladio::scrum::{
    adapters::memory::InMemoryBoardStore,
    domain::{JobNumber, PlannedDuration, ScrumTask, StaffId, TaskId, TaskStatus},
    services::{
        EqualizeOutcome, ScheduleSettings, SchedulingError, SchedulingService,
    },
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestScheduler =
    SchedulingService<InMemoryBoardStore, InMemoryHolidayCache, StubHolidaySource, FixedClock>;

/// Task described by the scenario before the board is stored.
pub struct TaskSpec {
    pub id: u64,
    pub name: String,
    pub days: u32,
    pub dependencies: Vec<u64>,
    pub assignee: Option<u64>,
    pub done_due: Option<NaiveDate>,
}

impl TaskSpec {
    /// Builds the board task.
    ///
    /// # Errors
    ///
    /// Returns an error when the name or duration is invalid.
    pub fn build(&self) -> Result<ScrumTask, eyre::Report> {
        let mut task = ScrumTask::new(
            TaskId::new(self.id),
            self.name.as_str(),
            PlannedDuration::new(self.days)?,
        )?
        .with_dependencies(self.dependencies.iter().copied().map(TaskId::new));
        if let Some(assignee) = self.assignee {
            task = task.with_assignee(StaffId::new(assignee));
        }
        if let Some(due) = self.done_due {
            task = task.with_status(TaskStatus::Done).with_due_date(due);
        }
        Ok(task)
    }
}

/// Scenario world for equalize behaviour tests.
pub struct EqualizeWorld {
    pub job_no: JobNumber,
    pub today: NaiveDate,
    pub tasks: Vec<TaskSpec>,
    pub holidays: Vec<Holiday>,
    pub feed_available: bool,
    pub store: Arc<InMemoryBoardStore>,
    pub outcome: Option<Result<EqualizeOutcome, SchedulingError>>,
}

impl EqualizeWorld {
    /// Creates a world for project `RRC/2025/001` with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            job_no: JobNumber::new("RRC/2025/001").expect("valid job number"),
            today: date("2025-01-06"),
            tasks: Vec::new(),
            holidays: Vec::new(),
            feed_available: true,
            store: Arc::new(InMemoryBoardStore::new()),
            outcome: None,
        }
    }

    /// Finds a described task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with the id was described.
    pub fn task_mut(&mut self, id: u64) -> Result<&mut TaskSpec, eyre::Report> {
        self.tasks
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| eyre::eyre!("task {id} was not described in the scenario"))
    }

    /// Builds a scheduler over the world's store, clock and holiday feed.
    #[must_use]
    pub fn scheduler(&self) -> TestScheduler {
        let feed = if self.feed_available {
            StubHolidaySource::serving(self.holidays.clone())
        } else {
            StubHolidaySource::offline()
        };
        SchedulingService::new(
            Arc::clone(&self.store),
            HolidayService::new(Arc::new(InMemoryHolidayCache::new()), Arc::new(feed)),
            Arc::new(FixedClock::on(self.today)),
            ScheduleSettings::new(
                CountryCode::new("AE").expect("valid country code"),
                Weekend::saturday_sunday(),
            ),
        )
    }

    /// Returns the successful equalize outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when equalize has not run or failed.
    pub fn outcome(&self) -> Result<&EqualizeOutcome, eyre::Report> {
        match self.outcome.as_ref() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("equalize failed: {err}")),
            None => Err(eyre::eyre!("equalize has not run")),
        }
    }
}

impl Default for EqualizeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EqualizeWorld {
    EqualizeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
