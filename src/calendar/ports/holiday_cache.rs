//! Cache port for holiday data keyed by country and year.

use crate::calendar::domain::{CountryCode, Holiday};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for holiday cache operations.
pub type HolidayCacheResult<T> = Result<T, HolidayCacheError>;

/// Local holiday storage contract.
#[async_trait]
pub trait HolidayCache: Send + Sync {
    /// Returns the cached holidays for a country and year.
    ///
    /// `None` means the year was never cached; `Some(vec![])` is a cached
    /// year without public holidays.
    async fn cached(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> HolidayCacheResult<Option<Vec<Holiday>>>;

    /// Replaces every cached holiday for the country and year.
    async fn replace(
        &self,
        country: &CountryCode,
        year: i32,
        holidays: &[Holiday],
    ) -> HolidayCacheResult<()>;
}

/// Errors returned by holiday cache implementations.
#[derive(Debug, Clone, Error)]
pub enum HolidayCacheError {
    /// Storage-layer failure.
    #[error("holiday cache error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HolidayCacheError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
