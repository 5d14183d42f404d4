//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, StubHolidaySource};
use chrono::NaiveDate;
use palladio::calendar::{
    adapters::memory::InMemoryHolidayCache,
    domain::{CountryCode, Holiday, Weekend},
    services::HolidayService,
};
use palladio::scrum::{
    adapters::memory::{InMemoryBoardStore, InMemoryProjectDirectory, InMemoryStaffDirectory},
    domain::{Department, PlannedDuration, TaskId, TaskTemplate, TemplateCatalog},
    services::{OverviewService, ScheduleSettings, SchedulingService, TaskBoardService},
};
use rstest::fixture;

/// Scheduling service wired to in-memory adapters.
pub type TestScheduler =
    SchedulingService<InMemoryBoardStore, InMemoryHolidayCache, StubHolidaySource, FixedClock>;

/// Board service wired to the in-memory store.
pub type TestBoards =
    TaskBoardService<InMemoryBoardStore, InMemoryProjectDirectory, FixedClock>;

/// Overview service wired to in-memory adapters.
pub type TestOverview = OverviewService<InMemoryBoardStore, InMemoryStaffDirectory, FixedClock>;

/// Provides a fresh in-memory board store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryBoardStore> {
    Arc::new(InMemoryBoardStore::new())
}

fn days(value: u32) -> PlannedDuration {
    PlannedDuration::new(value).expect("non-zero duration")
}

fn template(
    id: u64,
    name: &str,
    department: &str,
    duration: u32,
    fixed_time: u32,
    dependencies: &[u64],
) -> TaskTemplate {
    TaskTemplate {
        id: TaskId::new(id),
        name: name.to_owned(),
        department: Department::new(department),
        duration: days(duration),
        fixed_time: days(fixed_time),
        dependencies: dependencies.iter().copied().map(TaskId::new).collect(),
    }
}

/// A small design workflow: concept, then development, then drawings.
#[fixture]
pub fn catalog() -> TemplateCatalog {
    TemplateCatalog::new(vec![
        template(1, "Concept design", "Architecture", 2, 1, &[]),
        template(2, "Design development", "Architecture", 3, 2, &[1]),
        template(3, "Structural scheme", "Structure", 2, 2, &[1]),
        template(4, "Construction drawings", "Architecture", 5, 3, &[2, 3]),
    ])
}

/// Builds a scheduler whose clock reads `today`.
pub fn scheduler(
    store: &Arc<InMemoryBoardStore>,
    holidays: StubHolidaySource,
    today: NaiveDate,
) -> TestScheduler {
    let holiday_service =
        HolidayService::new(Arc::new(InMemoryHolidayCache::new()), Arc::new(holidays));
    SchedulingService::new(
        Arc::clone(store),
        holiday_service,
        Arc::new(FixedClock::on(today)),
        ScheduleSettings::new(
            CountryCode::new("AE").expect("valid country code"),
            Weekend::saturday_sunday(),
        ),
    )
}

/// Builds a board service whose clock reads `today`.
pub fn boards(
    store: &Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
    today: NaiveDate,
) -> TestBoards {
    TaskBoardService::new(
        Arc::clone(store),
        Arc::new(InMemoryProjectDirectory::default()),
        Arc::new(FixedClock::on(today)),
        Arc::new(catalog),
    )
}

/// Builds an overview service whose clock reads `today`.
pub fn overview(
    store: &Arc<InMemoryBoardStore>,
    directory: InMemoryStaffDirectory,
    today: NaiveDate,
) -> TestOverview {
    OverviewService::new(
        Arc::clone(store),
        Arc::new(directory),
        Arc::new(FixedClock::on(today)),
    )
}

/// A holiday on the given date.
pub fn holiday(date: NaiveDate) -> Holiday {
    Holiday::new(date, "Public holiday")
}
