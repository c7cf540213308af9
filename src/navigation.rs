//! Month-by-month navigation.

use std::fmt;

use chrono::NaiveDate;

use crate::calendar::{CalendarDate, Month};
use crate::events::{EventRecord, EventStore};

/// The month currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewCursor {
    pub year: i32,
    pub month: Month,
}

impl ViewCursor {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The following month. After the Jours du Silence comes Ordium of the next year.
    ///
    /// The Jours du Silence of `i32::MAX` have no successor and return themselves.
    pub fn next(self) -> Self {
        match Month::from_index(self.month.index() + 1) {
            Ok(month) => Self { month, ..self },
            Err(_) => match self.year.checked_add(1) {
                Some(year) => Self {
                    year,
                    month: Month::Ordium,
                },
                None => self,
            },
        }
    }

    /// The preceding month. Before Ordium come the Jours du Silence of the previous year.
    ///
    /// Ordium of `i32::MIN` has no predecessor and returns itself.
    pub fn prev(self) -> Self {
        match self.month.index().checked_sub(1) {
            Some(index) => Self {
                month: Month::ALL[usize::from(index)],
                ..self
            },
            None => match self.year.checked_sub(1) {
                Some(year) => Self {
                    year,
                    month: Month::Silence,
                },
                None => self,
            },
        }
    }

    pub fn days(self) -> u8 {
        self.month.days_in(self.year)
    }

    /// `count` consecutive months starting at this one.
    pub fn span(self, count: usize) -> impl Iterator<Item = ViewCursor> {
        std::iter::successors(Some(self), |c| Some(c.next())).take(count)
    }
}

impl Default for ViewCursor {
    fn default() -> Self {
        Self::new(0, Month::Ordium)
    }
}

impl fmt::Display for ViewCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} An {}", self.month, self.year)
    }
}

/// Holds the viewing cursor and moves it one month at a time.
///
/// Years are unbounded in both directions. Any [`MonthView`] built before a
/// move becomes stale and has to be rebuilt.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    cursor: ViewCursor,
}

impl Navigator {
    /// A navigator positioned on Ordium, An 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(cursor: ViewCursor) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn next(&mut self) -> ViewCursor {
        self.cursor = self.cursor.next();
        self.cursor
    }

    pub fn prev(&mut self) -> ViewCursor {
        self.cursor = self.cursor.prev();
        self.cursor
    }

    /// Builds the day listing for the current month.
    pub fn month_view(&self, store: &EventStore<'_>) -> MonthView {
        MonthView::build(self.cursor, store)
    }
}

/// One day of a month listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// `None` only when the year is too far out for the real calendar.
    pub real_date: Option<NaiveDate>,
    pub events: Vec<EventRecord>,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Days and events of one month, as seen from a given cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub cursor: ViewCursor,
    pub days: Vec<DayCell>,
}

impl MonthView {
    pub fn build(cursor: ViewCursor, store: &EventStore<'_>) -> Self {
        let days = CalendarDate::month_days(cursor.year, cursor.month)
            .map(|date| DayCell {
                date,
                real_date: date.to_real_date().ok(),
                events: store.lookup_date(date),
            })
            .collect();
        Self { cursor, days }
    }

    /// Whether `navigator` has moved away since this view was built.
    pub fn is_stale(&self, navigator: &Navigator) -> bool {
        self.cursor != navigator.cursor()
    }

    /// Days that carry at least one event.
    pub fn event_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|d| d.has_events())
    }

    /// First and last real dates covered by the month.
    pub fn real_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.days.first()?.real_date?;
        let last = self.days.last()?.real_date?;
        Some((first, last))
    }
}
