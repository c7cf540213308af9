//! Date arithmetic for the Rectitude calendar.
//!
//! The Rectitude year has twelve 30-day months followed by the Jours du
//! Silence, a block of 4 days (5 when the corresponding real year is a leap
//! year). Year 0 began on 1972-01-01.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Month`] | The thirteen months, by index and name |
//! | [`CalendarDate`] | Validated date with year context |
//! | [`to_real_date`] / [`from_real_date`] | Fixed 360-day mapping to the real calendar |
//! | [`from_day_of_year`] | Day-of-year resolution, including the Silence block |

mod convert;
mod date;
mod month;

use chrono::NaiveDate;

pub use convert::{from_day_of_year, from_real_date, to_real_date};
pub use date::CalendarDate;
pub use month::Month;

use crate::error::CalendarError;

/// Real year in which An 0 of the Rectitude began.
///
/// The length of the Jours du Silence in fictional year `y` follows the leap
/// status of real year `y + EPOCH_REAL_YEAR`.
pub const EPOCH_REAL_YEAR: i32 = 1972;

/// Real date of 1 Ordium, An 0.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(EPOCH_REAL_YEAR, 1, 1) {
    Some(date) => date,
    None => panic!("epoch anchor must be a valid date"),
};

/// Days in each of the twelve regular months.
pub const DAYS_PER_MONTH: u8 = 30;

/// Number of regular (30-day) months.
pub const REGULAR_MONTHS: u8 = 12;

pub const SILENCE_DAYS_COMMON: u8 = 4;
pub const SILENCE_DAYS_LEAP: u8 = 5;

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
///
/// This is the single rule used throughout the crate, including for the
/// Jours du Silence and for timeline dates.
pub fn is_leap_year(real_year: i32) -> bool {
    real_year % 4 == 0 && (real_year % 100 != 0 || real_year % 400 == 0)
}

/// Number of days in the month at `month_index` of fictional `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month_index > 12`.
pub fn days_in_month(year: i32, month_index: u8) -> Result<u8, CalendarError> {
    Ok(Month::from_index(month_index)?.days_in(year))
}

/// Number of days in fictional `year` (364 or 365).
pub fn days_in_year(year: i32) -> u16 {
    u16::from(REGULAR_MONTHS) * u16::from(DAYS_PER_MONTH) + u16::from(Month::Silence.days_in(year))
}
