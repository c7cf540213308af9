//! Integration tests for date arithmetic and conversion.

use chrono::NaiveDate;
use rcal::calendar::{
    CalendarDate, EPOCH_REAL_YEAR, Month, days_in_month, days_in_year, from_day_of_year,
    from_real_date, is_leap_year, to_real_date,
};
use rcal::CalendarError;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn epoch_maps_to_founding_day() {
    assert_eq!(to_real_date(0, 0, 1).unwrap(), ymd(EPOCH_REAL_YEAR, 1, 1));
    assert_eq!(from_real_date(ymd(1972, 1, 1)), CalendarDate::epoch());
}

#[test]
fn regular_months_have_thirty_days() {
    for year in [-7, 0, 1, 28, 128] {
        for index in 0..12 {
            assert_eq!(days_in_month(year, index).unwrap(), 30);
        }
    }
}

#[test]
fn silence_follows_real_leap_years() {
    for year in -100..100 {
        let expected = if is_leap_year(year + EPOCH_REAL_YEAR) { 5 } else { 4 };
        assert_eq!(days_in_month(year, 12).unwrap(), expected, "An {year}");
        assert_eq!(days_in_year(year), 360 + u16::from(expected), "An {year}");
    }
}

#[test]
fn month_index_thirteen_is_invalid() {
    assert_eq!(
        days_in_month(0, 13).unwrap_err(),
        CalendarError::InvalidMonth { month_index: 13 }
    );
}

#[test]
fn day_of_year_round_trips_for_every_day() {
    for year in [-5, -4, 0, 1, 3, 28] {
        for month in Month::ALL {
            for date in CalendarDate::month_days(year, month) {
                assert_eq!(from_day_of_year(year, date.day_of_year()).unwrap(), date);
            }
        }
    }
}

#[test]
fn day_of_year_past_end_is_out_of_range() {
    // An 1 is 1973, not a leap year.
    assert!(matches!(
        from_day_of_year(1, 365),
        Err(CalendarError::DayOfYearOutOfRange { year_length: 364, .. })
    ));
    assert!(from_day_of_year(0, 365).is_ok());
    assert!(from_day_of_year(0, 366).is_err());
}

#[test]
fn real_date_round_trip_outside_silence() {
    for year in [-3, 0, 2, 50] {
        for month in Month::ALL.iter().filter(|m| !m.is_silence()) {
            for day in [1, 15, 30] {
                let date = CalendarDate::new(year, *month, day).unwrap();
                assert_eq!(from_real_date(date.to_real_date().unwrap()), date);
            }
        }
    }
}

#[test]
fn silence_shares_real_dates_with_next_ordium() {
    let silence = CalendarDate::new(0, Month::Silence, 1).unwrap();
    let ordium = CalendarDate::new(1, Month::Ordium, 1).unwrap();
    assert_eq!(silence.to_real_date().unwrap(), ordium.to_real_date().unwrap());
}

#[test]
fn historical_anchor_dates() {
    // 360-day arithmetic, not the real calendar dates quoted in the labels.
    assert_eq!(to_real_date(20, 1, 8).unwrap(), ymd(1991, 10, 25));
}

#[test]
fn invalid_day_is_reported() {
    assert!(matches!(
        to_real_date(1, 12, 5),
        Err(CalendarError::InvalidDay { day: 5, max_day: 4, .. })
    ));
}
