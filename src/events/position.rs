//! Event position keys.

use std::fmt;
use std::str::FromStr;

use crate::calendar::{CalendarDate, Month};
use crate::error::CalendarError;

/// A day and month that recur every year, such as "15 Ordium".
///
/// The day is checked against the longest possible length of the month, so
/// "5 Jours du Silence" is accepted even though it only occurs in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnualDay {
    month: Month,
    day: u8,
}

impl AnnualDay {
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRecurringDay`] if `day` is zero or
    /// exceeds [`Month::max_days`].
    pub fn new(day: u8, month: Month) -> Result<Self, CalendarError> {
        let max_day = month.max_days();
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidRecurringDay {
                day,
                month: month.name(),
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn month(self) -> Month {
        self.month
    }

    /// Whether this annual day falls on `date`.
    pub fn occurs_on(self, date: CalendarDate) -> bool {
        self.month == date.month() && self.day == date.day()
    }
}

impl From<CalendarDate> for AnnualDay {
    fn from(date: CalendarDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for AnnualDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// Key under which events are stored.
///
/// Recurring positions print as `"15 Ordium"`; year-qualified positions
/// print as `"15 Ordium, An 3"`. Both forms parse back with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Recurring(AnnualDay),
    Dated(CalendarDate),
}

impl Position {
    /// Recurring position for `day` of `month`.
    ///
    /// # Errors
    ///
    /// See [`AnnualDay::new`].
    pub fn recurring(day: u8, month: Month) -> Result<Self, CalendarError> {
        AnnualDay::new(day, month).map(Position::Recurring)
    }

    pub fn dated(date: CalendarDate) -> Self {
        Position::Dated(date)
    }

    pub fn day(&self) -> u8 {
        match self {
            Position::Recurring(annual) => annual.day(),
            Position::Dated(date) => date.day(),
        }
    }

    pub fn month(&self) -> Month {
        match self {
            Position::Recurring(annual) => annual.month(),
            Position::Dated(date) => date.month(),
        }
    }

    /// Year of a dated position, `None` for recurring ones.
    pub fn year(&self) -> Option<i32> {
        match self {
            Position::Recurring(_) => None,
            Position::Dated(date) => Some(date.year()),
        }
    }

    /// Whether an event at this position shows on `date`.
    pub fn occurs_on(&self, date: CalendarDate) -> bool {
        match self {
            Position::Recurring(annual) => annual.occurs_on(date),
            Position::Dated(d) => *d == date,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Recurring(annual) => fmt::Display::fmt(annual, f),
            Position::Dated(date) => fmt::Display::fmt(date, f),
        }
    }
}

impl FromStr for Position {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || CalendarError::InvalidPosition {
            input: input.to_string(),
        };

        let (day_month, year) = match input.split_once(',') {
            Some((head, tail)) => {
                let year = tail
                    .trim()
                    .strip_prefix("An")
                    .ok_or_else(invalid)?
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| invalid())?;
                (head.trim(), Some(year))
            }
            None => (input, None),
        };

        let (day, month) = day_month
            .split_once(char::is_whitespace)
            .ok_or_else(invalid)?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        let month = month.trim().parse::<Month>()?;

        match year {
            Some(year) => Ok(Position::Dated(CalendarDate::new(year, month, day)?)),
            None => Position::recurring(day, month),
        }
    }
}
