//! Validated Rectitude date with year context.

use std::fmt;

use chrono::NaiveDate;

use crate::calendar::{DAYS_PER_MONTH, Month, convert};
use crate::error::CalendarError;

/// A date in the Rectitude calendar.
///
/// Years may be negative (before the founding in 1972). The day is always
/// valid for its month and year: 1..=30 in regular months, 1..=4 or 1..=5
/// in the Jours du Silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: u8,
}

impl CalendarDate {
    /// Creates a date from a year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is zero or exceeds the
    /// length of `month` in `year`.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        let max_day = month.days_in(year);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.name(),
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a zero-based month index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for an index above 12, or
    /// [`CalendarError::InvalidDay`] as for [`CalendarDate::new`].
    pub fn from_indices(year: i32, month_index: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, Month::from_index(month_index)?, day)
    }

    /// Builds a date whose parts are already known to be in range.
    pub(super) fn from_valid_parts(year: i32, month: Month, day: u8) -> Self {
        debug_assert!(day >= 1 && day <= month.days_in(year));
        Self { year, month, day }
    }

    /// Every day of `month` in `year`, in order.
    pub fn month_days(year: i32, month: Month) -> impl Iterator<Item = CalendarDate> {
        (1..=month.days_in(year)).map(move |day| Self::from_valid_parts(year, month, day))
    }

    /// The first day of the Rectitude, 1 Ordium An 0.
    pub fn epoch() -> Self {
        Self {
            year: 0,
            month: Month::Ordium,
            day: 1,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> Month {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// One-based day of the year: `month_index * 30 + day`.
    pub fn day_of_year(self) -> u16 {
        u16::from(self.month.index()) * u16::from(DAYS_PER_MONTH) + u16::from(self.day)
    }

    /// Real calendar date under the fixed 360-day arithmetic.
    ///
    /// See [`convert::to_real_date`] for the approximation involved.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RealDateOutOfRange`] if the result does not
    /// fit in [`NaiveDate`].
    pub fn to_real_date(self) -> Result<NaiveDate, CalendarError> {
        convert::real_date_of(self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, An {}", self.day, self.month, self.year)
    }
}
