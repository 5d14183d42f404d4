//! In-memory holiday cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::calendar::{
    domain::{CountryCode, Holiday},
    ports::{HolidayCache, HolidayCacheError, HolidayCacheResult},
};

type CacheKey = (CountryCode, i32);

/// Thread-safe in-memory holiday cache.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayCache {
    entries: Arc<RwLock<HashMap<CacheKey, Vec<Holiday>>>>,
}

impl InMemoryHolidayCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> HolidayCacheError {
    HolidayCacheError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl HolidayCache for InMemoryHolidayCache {
    async fn cached(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> HolidayCacheResult<Option<Vec<Holiday>>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&(country.clone(), year)).cloned())
    }

    async fn replace(
        &self,
        country: &CountryCode,
        year: i32,
        holidays: &[Holiday],
    ) -> HolidayCacheResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert((country.clone(), year), holidays.to_vec());
        Ok(())
    }
}
