//! Application services for holiday data.

mod holidays;

pub use holidays::{
    CalendarLookup, HolidayLookup, HolidayService, HolidayServiceError, HolidayServiceResult,
    RefreshOutcome,
};
