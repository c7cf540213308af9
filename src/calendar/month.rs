//! The thirteen months of the Rectitude year.

use std::fmt;
use std::str::FromStr;

use crate::calendar::{
    DAYS_PER_MONTH, EPOCH_REAL_YEAR, SILENCE_DAYS_COMMON, SILENCE_DAYS_LEAP, is_leap_year,
};
use crate::error::CalendarError;

/// A month of the Rectitude calendar.
///
/// The first twelve months have 30 days each. The thirteenth, the
/// "Jours du Silence", is a short trailing block of 4 or 5 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Ordium,
    Fervor,
    Laboris,
    Prudium,
    Valoris,
    Constium,
    Septium,
    Servium,
    Fortium,
    Decorum,
    Rectium,
    Finalis,
    /// "Jours du Silence".
    Silence,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 13] = [
        Month::Ordium,
        Month::Fervor,
        Month::Laboris,
        Month::Prudium,
        Month::Valoris,
        Month::Constium,
        Month::Septium,
        Month::Servium,
        Month::Fortium,
        Month::Decorum,
        Month::Rectium,
        Month::Finalis,
        Month::Silence,
    ];

    /// Returns the month at `index` (0 = Ordium, 12 = Jours du Silence).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `index > 12`.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidMonth { month_index: index })
    }

    /// Zero-based position in the year.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Display name, exactly as used in position keys.
    pub fn name(self) -> &'static str {
        match self {
            Month::Ordium => "Ordium",
            Month::Fervor => "Fervor",
            Month::Laboris => "Laboris",
            Month::Prudium => "Prudium",
            Month::Valoris => "Valoris",
            Month::Constium => "Constium",
            Month::Septium => "Septium",
            Month::Servium => "Servium",
            Month::Fortium => "Fortium",
            Month::Decorum => "Decorum",
            Month::Rectium => "Rectium",
            Month::Finalis => "Finalis",
            Month::Silence => "Jours du Silence",
        }
    }

    pub fn is_silence(self) -> bool {
        self == Month::Silence
    }

    /// Number of days in this month for the given fictional year.
    ///
    /// The Silence block follows the leap status of the corresponding real
    /// year (`year + EPOCH_REAL_YEAR`), not of the fictional year itself.
    pub fn days_in(self, year: i32) -> u8 {
        if !self.is_silence() {
            return DAYS_PER_MONTH;
        }
        // Leap status repeats every 400 years, so the real year can be reduced
        // into range before it overflows `i32`.
        let real_year = (i64::from(year) + i64::from(EPOCH_REAL_YEAR)).rem_euclid(400) as i32;
        if is_leap_year(real_year) {
            SILENCE_DAYS_LEAP
        } else {
            SILENCE_DAYS_COMMON
        }
    }

    /// Largest day number this month can ever hold, regardless of year.
    pub fn max_days(self) -> u8 {
        if self.is_silence() {
            SILENCE_DAYS_LEAP
        } else {
            DAYS_PER_MONTH
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parses a month name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| CalendarError::UnknownMonth {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.index()), i);
            assert_eq!(Month::from_index(month.index()).unwrap(), *month);
        }
    }

    #[test]
    fn from_index_rejects_thirteen() {
        assert_eq!(
            Month::from_index(13).unwrap_err(),
            CalendarError::InvalidMonth { month_index: 13 }
        );
    }

    #[test]
    fn names_parse_back() {
        for month in Month::ALL {
            assert_eq!(month.name().parse::<Month>().unwrap(), month);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("ordium".parse::<Month>().is_err());
        assert!("jours du silence".parse::<Month>().is_err());
    }

    #[test]
    fn silence_display_name() {
        assert_eq!(Month::Silence.to_string(), "Jours du Silence");
    }

    #[test]
    fn silence_length_follows_real_year() {
        // An 0 is 1972 (leap), An 1 is 1973, An 28 is 2000 (leap), An 128 is 2100.
        assert_eq!(Month::Silence.days_in(0), 5);
        assert_eq!(Month::Silence.days_in(1), 4);
        assert_eq!(Month::Silence.days_in(28), 5);
        assert_eq!(Month::Silence.days_in(128), 4);
    }

    #[test]
    fn silence_length_near_the_end_of_the_year_range() {
        // Real years 2147485616 (leap) and 2147485619 lie past i32::MAX.
        assert_eq!(Month::Silence.days_in(i32::MAX - 3), 5);
        assert_eq!(Month::Silence.days_in(i32::MAX), 4);
        // Real year -2147481676 is divisible by 4 but not by 100.
        assert_eq!(Month::Silence.days_in(i32::MIN), 5);
    }

    #[test]
    fn regular_months_have_thirty_days() {
        for month in &Month::ALL[..12] {
            assert_eq!(month.days_in(-7), 30);
            assert_eq!(month.days_in(0), 30);
        }
    }
}
