//! Port contracts for holiday data.
//!
//! Holidays are read from a local cache and refreshed from a remote source.

pub mod holiday_cache;
pub mod holiday_source;

pub use holiday_cache::{HolidayCache, HolidayCacheError, HolidayCacheResult};
pub use holiday_source::{HolidaySource, HolidaySourceError, HolidaySourceResult};
