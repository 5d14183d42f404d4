//! Cache-first holiday lookup with graceful degradation.

use crate::calendar::{
    domain::{CalendarError, CountryCode, Holiday, HolidaySet, Weekend, WorkingCalendar},
    ports::{HolidayCache, HolidayCacheError, HolidaySource, HolidaySourceError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Holidays returned for one country and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayLookup {
    /// Holidays known for the year.
    pub holidays: Vec<Holiday>,
    /// `true` when the year was never cached and the remote fetch failed;
    /// `holidays` is then empty.
    pub degraded: bool,
}

/// Working calendar assembled from one or more holiday years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLookup {
    /// The calendar to schedule against.
    pub calendar: WorkingCalendar,
    /// `true` when any year fell back to cached data.
    pub degraded: bool,
}

/// Result of a forced holiday refresh.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// Remote data replaced the cached year.
    Refreshed {
        /// Number of holidays now cached.
        count: usize,
    },
    /// The fetch failed; the cached year was left untouched.
    Stale {
        /// Number of holidays still cached.
        cached: usize,
        /// Why the fetch failed.
        reason: HolidaySourceError,
    },
}

/// Service-level errors for holiday operations.
///
/// Remote fetch failures never appear here; they degrade to cached data.
#[derive(Debug, Error)]
pub enum HolidayServiceError {
    /// The local cache failed.
    #[error(transparent)]
    Cache(#[from] HolidayCacheError),
    /// The calendar could not be built.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result type for holiday service operations.
pub type HolidayServiceResult<T> = Result<T, HolidayServiceError>;

/// Holiday orchestration service.
#[derive(Clone)]
pub struct HolidayService<C, S>
where
    C: HolidayCache,
    S: HolidaySource,
{
    cache: Arc<C>,
    source: Arc<S>,
}

impl<C, S> HolidayService<C, S>
where
    C: HolidayCache,
    S: HolidaySource,
{
    /// Creates a new holiday service.
    #[must_use]
    pub const fn new(cache: Arc<C>, source: Arc<S>) -> Self {
        Self { cache, source }
    }

    /// Returns the holidays for a country and year.
    ///
    /// A cached year is returned as-is, even when it has no holidays. When
    /// the year was never cached the remote source is queried and its answer
    /// cached; if that fails a warning is logged and an empty set is returned
    /// with `degraded` set.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayServiceError::Cache`] when the cache itself fails.
    pub async fn holidays(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> HolidayServiceResult<HolidayLookup> {
        if let Some(cached) = self.cache.cached(country, year).await? {
            return Ok(HolidayLookup {
                holidays: cached,
                degraded: false,
            });
        }

        match self.source.fetch(country, year).await {
            Ok(fetched) => {
                self.cache.replace(country, year, &fetched).await?;
                info!(%country, year, count = fetched.len(), "cached public holidays");
                Ok(HolidayLookup {
                    holidays: fetched,
                    degraded: false,
                })
            }
            Err(err) => {
                warn!(
                    %country,
                    year,
                    error = %err,
                    "could not fetch public holidays, using local data"
                );
                Ok(HolidayLookup {
                    holidays: Vec::new(),
                    degraded: true,
                })
            }
        }
    }

    /// Re-fetches a year from the remote source and replaces the cache.
    ///
    /// The cached year is only overwritten once the fetch has succeeded, so a
    /// network failure leaves the previous data in place.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayServiceError::Cache`] when the cache fails.
    pub async fn refresh(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> HolidayServiceResult<RefreshOutcome> {
        match self.source.fetch(country, year).await {
            Ok(fetched) => {
                self.cache.replace(country, year, &fetched).await?;
                info!(%country, year, count = fetched.len(), "refreshed public holidays");
                Ok(RefreshOutcome::Refreshed {
                    count: fetched.len(),
                })
            }
            Err(reason) => {
                let cached = self
                    .cache
                    .cached(country, year)
                    .await?
                    .map_or(0, |holidays| holidays.len());
                warn!(
                    %country,
                    year,
                    cached,
                    error = %reason,
                    "holiday refresh failed, keeping cached data"
                );
                Ok(RefreshOutcome::Stale { cached, reason })
            }
        }
    }

    /// Builds a working calendar covering the given years.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayServiceError::Calendar`] when the weekend leaves no
    /// working days, or [`HolidayServiceError::Cache`] when the cache fails.
    pub async fn calendar_for(
        &self,
        country: &CountryCode,
        years: &[i32],
        weekend: Weekend,
    ) -> HolidayServiceResult<CalendarLookup> {
        let mut holidays = HolidaySet::new();
        let mut degraded = false;
        for year in years {
            let lookup = self.holidays(country, *year).await?;
            degraded |= lookup.degraded;
            holidays.extend(lookup.holidays.iter().map(|holiday| holiday.date));
        }
        let calendar = WorkingCalendar::new(weekend, holidays)?;
        Ok(CalendarLookup { calendar, degraded })
    }
}
