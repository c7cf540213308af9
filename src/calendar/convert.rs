//! Conversions between Rectitude dates, day-of-year values and real dates.

use chrono::{Duration, NaiveDate};

use crate::calendar::{
    CalendarDate, DAYS_PER_MONTH, EPOCH, Month, REGULAR_MONTHS, days_in_year,
};
use crate::error::CalendarError;

/// Days between the epoch and `date` under the fixed arithmetic.
fn days_since_epoch(date: CalendarDate) -> i64 {
    i64::from(date.year()) * 360
        + i64::from(date.month().index()) * i64::from(DAYS_PER_MONTH)
        + i64::from(date.day() - 1)
}

pub(crate) fn real_date_of(date: CalendarDate) -> Result<NaiveDate, CalendarError> {
    Duration::try_days(days_since_epoch(date))
        .and_then(|offset| EPOCH.checked_add_signed(offset))
        .ok_or(CalendarError::RealDateOutOfRange { year: date.year() })
}

/// Converts a Rectitude date to the real calendar.
///
/// The offset from 1972-01-01 is `year * 360 + month_index * 30 + (day - 1)`.
/// Every year counts as exactly 360 days and the Jours du Silence are not
/// added, so real dates drift from the fictional year by 5 or 6 days per
/// year, and a Silence day maps onto the same real date as the matching day
/// of the next Ordium. This is the established mapping and is kept as-is.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// for invalid input, and [`CalendarError::RealDateOutOfRange`] if the
/// result does not fit in [`NaiveDate`].
///
/// # Examples
///
/// ```
/// use rcal::calendar::to_real_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(to_real_date(0, 1, 1).unwrap(), NaiveDate::from_ymd_opt(1972, 1, 31).unwrap());
/// ```
pub fn to_real_date(year: i32, month_index: u8, day: u8) -> Result<NaiveDate, CalendarError> {
    CalendarDate::from_indices(year, month_index, day)?.to_real_date()
}

/// Converts a real date back to the Rectitude calendar.
///
/// This is the inverse of [`to_real_date`] under the same 360-day
/// arithmetic, so it never produces a day of the Jours du Silence.
pub fn from_real_date(date: NaiveDate) -> CalendarDate {
    let days = date.signed_duration_since(EPOCH).num_days();
    let year = days.div_euclid(360);
    let rem = days.rem_euclid(360);
    let month_index = (rem / i64::from(DAYS_PER_MONTH)) as u8;
    let day = (rem % i64::from(DAYS_PER_MONTH)) as u8 + 1;
    // NaiveDate spans roughly ±262k years, which fits in i32 after dividing by 360.
    let year = year as i32;
    CalendarDate::from_valid_parts(year, Month::ALL[usize::from(month_index)], day)
}

/// Resolves a one-based day-of-year into a date.
///
/// Days 1..=360 fall in the twelve 30-day months; the remainder lands in the
/// Jours du Silence, which hold 4 or 5 days depending on the year.
///
/// # Errors
///
/// Returns [`CalendarError::DayOfYearOutOfRange`] if `day_of_year` is zero
/// or larger than [`days_in_year`].
pub fn from_day_of_year(year: i32, day_of_year: u16) -> Result<CalendarDate, CalendarError> {
    let year_length = days_in_year(year);
    if day_of_year == 0 || day_of_year > year_length {
        return Err(CalendarError::DayOfYearOutOfRange {
            day_of_year,
            year,
            year_length,
        });
    }

    let mut remaining = day_of_year;
    for month in &Month::ALL[..usize::from(REGULAR_MONTHS)] {
        if remaining <= u16::from(DAYS_PER_MONTH) {
            return CalendarDate::new(year, *month, remaining as u8);
        }
        remaining -= u16::from(DAYS_PER_MONTH);
    }
    CalendarDate::new(year, Month::Silence, remaining as u8)
}
