//! Holiday adapters.
//!
//! - [`memory::InMemoryHolidayCache`]: thread-safe in-memory holiday cache
//! - [`nager::NagerHolidaySource`]: HTTP client for the Nager.Date public
//!   holiday API

pub mod memory;
pub mod nager;
