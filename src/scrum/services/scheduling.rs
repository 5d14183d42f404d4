//! Bulk due-date rescheduling ("equalize") for one project.

use crate::calendar::{
    domain::{CalendarError, CountryCode, Weekend},
    ports::{HolidayCache, HolidaySource},
    services::{HolidayService, HolidayServiceError},
};
use crate::scrum::{
    domain::{IgnoredDependency, JobNumber, plan_schedule},
    ports::{BoardStoreError, ScrumBoardStore},
};
use chrono::Datelike;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Calendar settings applied when scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    /// Country whose public holidays are skipped.
    pub country: CountryCode,
    /// Non-working weekdays.
    pub weekend: Weekend,
}

impl ScheduleSettings {
    /// Creates settings for a country with the given weekend.
    #[must_use]
    pub const fn new(country: CountryCode, weekend: Weekend) -> Self {
        Self { country, weekend }
    }
}

/// Result of rescheduling a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizeOutcome {
    /// Number of open tasks that received a due date.
    pub updated: usize,
    /// Dependency edges that did not influence ordering.
    pub ignored_dependencies: Vec<IgnoredDependency>,
    /// `true` when holiday data could not be fetched and cached data was used.
    pub holidays_degraded: bool,
}

/// Service-level errors for scheduling.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// No board is stored for the project.
    #[error("no scrum board for job {0}")]
    BoardNotFound(JobNumber),
    /// Board persistence failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// Holiday data could not be read from the cache.
    #[error(transparent)]
    Holidays(#[from] HolidayServiceError),
    /// Due dates could not be computed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result type for scheduling operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Orchestrates board loading, holiday lookup and due-date planning.
#[derive(Clone)]
pub struct SchedulingService<B, C, S, K>
where
    B: ScrumBoardStore,
    C: HolidayCache,
    S: HolidaySource,
    K: Clock + Send + Sync,
{
    store: Arc<B>,
    holidays: HolidayService<C, S>,
    clock: Arc<K>,
    settings: ScheduleSettings,
}

impl<B, C, S, K> SchedulingService<B, C, S, K>
where
    B: ScrumBoardStore,
    C: HolidayCache,
    S: HolidaySource,
    K: Clock + Send + Sync,
{
    /// Creates a new scheduling service.
    #[must_use]
    pub const fn new(
        store: Arc<B>,
        holidays: HolidayService<C, S>,
        clock: Arc<K>,
        settings: ScheduleSettings,
    ) -> Self {
        Self {
            store,
            holidays,
            clock,
            settings,
        }
    }

    /// Recomputes due dates for every open task of a project.
    ///
    /// Scheduling starts from the clock's local date and skips weekends and
    /// the configured country's public holidays for this year and next. The
    /// updated board is written back in a single save; `Done` tasks keep
    /// their due dates.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::BoardNotFound`] when the project has no
    /// board, [`SchedulingError::Store`] when loading or saving fails (the
    /// stored board is then unchanged), and [`SchedulingError::Holidays`] or
    /// [`SchedulingError::Calendar`] when no calendar can be built.
    pub async fn equalize(&self, job_no: &JobNumber) -> SchedulingResult<EqualizeOutcome> {
        let mut board = self
            .store
            .load_board(job_no)
            .await?
            .ok_or_else(|| SchedulingError::BoardNotFound(job_no.clone()))?;

        let today = self.clock.local().date_naive();
        let years = [today.year(), today.year().saturating_add(1)];
        let lookup = self
            .holidays
            .calendar_for(&self.settings.country, &years, self.settings.weekend)
            .await?;
        if lookup.degraded {
            warn!(%job_no, country = %self.settings.country, "scheduling without fresh holiday data");
        }

        let plan = plan_schedule(board.tasks(), &lookup.calendar, today)?;
        let updated = plan.apply(&mut board);
        self.store.save_board(&board).await?;

        info!(
            %job_no,
            updated,
            ignored = plan.ignored().len(),
            start = %today,
            "equalized due dates"
        );
        Ok(EqualizeOutcome {
            updated,
            ignored_dependencies: plan.ignored().to_vec(),
            holidays_degraded: lookup.degraded,
        })
    }
}
