//! Domain model for working-day arithmetic.
//!
//! Everything in this module is pure: holiday data is handed in by the
//! caller and "today" is always an explicit argument.

mod error;
mod holiday;
mod working_days;

pub use error::CalendarError;
pub use holiday::{CountryCode, Holiday, HolidaySet};
pub use working_days::{Weekend, WorkingCalendar};
