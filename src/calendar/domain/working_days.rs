//! Weekend configuration and working-day advancement.

use super::{CalendarError, HolidaySet};
use chrono::{Datelike, NaiveDate, Weekday};

const ALL_DAYS: u8 = 0b111_1111;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn day_bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

/// Set of weekdays that never count as working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekend {
    mask: u8,
}

impl Weekend {
    /// A weekend with no days off.
    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    /// The Saturday/Sunday weekend.
    #[must_use]
    pub fn saturday_sunday() -> Self {
        Self::from_days([Weekday::Sat, Weekday::Sun])
    }

    /// Builds a weekend from the given days; duplicates are ignored.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days.into_iter().fold(0, |mask, day| mask | day_bit(day));
        Self { mask }
    }

    /// Returns `true` when the weekday is a day off.
    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.mask & day_bit(day) != 0
    }

    /// Returns the weekend days, Monday first.
    #[must_use]
    pub fn days(self) -> Vec<Weekday> {
        WEEK.into_iter().filter(|day| self.contains(*day)).collect()
    }

    const fn covers_whole_week(self) -> bool {
        self.mask & ALL_DAYS == ALL_DAYS
    }
}

impl Default for Weekend {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}

/// Calendar that knows which days count toward a task's duration.
///
/// A day is a working day when its weekday is not part of the [`Weekend`]
/// and its date is not in the [`HolidaySet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCalendar {
    weekend: Weekend,
    holidays: HolidaySet,
}

impl WorkingCalendar {
    /// Creates a calendar from a weekend definition and a holiday set.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoWorkingDays`] when the weekend covers all
    /// seven days.
    pub fn new(weekend: Weekend, holidays: HolidaySet) -> Result<Self, CalendarError> {
        if weekend.covers_whole_week() {
            return Err(CalendarError::NoWorkingDays);
        }
        Ok(Self { weekend, holidays })
    }

    /// Creates a Saturday/Sunday calendar with the given holidays.
    #[must_use]
    pub fn with_standard_weekend(holidays: HolidaySet) -> Self {
        Self {
            weekend: Weekend::saturday_sunday(),
            holidays,
        }
    }

    /// Returns the weekend definition.
    #[must_use]
    pub const fn weekend(&self) -> Weekend {
        self.weekend
    }

    /// Returns the holiday set.
    #[must_use]
    pub const fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns `true` when the date counts toward a duration.
    #[must_use]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.weekend.contains(date.weekday()) && !self.holidays.contains(date)
    }

    /// Moves forward from `start` until `num_days` working days have passed.
    ///
    /// The start date itself is never counted, so for any `num_days >= 1`
    /// the result is strictly after `start` and is itself a working day.
    /// A zero count returns `start` unchanged; task durations are at least
    /// one day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if the walk runs past the
    /// last representable date.
    pub fn advance(&self, start: NaiveDate, num_days: u32) -> Result<NaiveDate, CalendarError> {
        let mut current = start;
        let mut counted = 0_u32;
        while counted < num_days {
            current = current
                .succ_opt()
                .ok_or(CalendarError::DateOutOfRange(current))?;
            if self.is_working_day(current) {
                counted += 1;
            }
        }
        Ok(current)
    }

    /// Counts working days in the half-open range `(start, end]`.
    ///
    /// Returns zero when `end` is not after `start`.
    #[must_use]
    pub fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        start
            .iter_days()
            .skip(1)
            .take_while(|day| *day <= end)
            .fold(0, |count, day| {
                if self.is_working_day(day) {
                    count + 1
                } else {
                    count
                }
            })
    }
}
