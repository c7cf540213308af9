//! Error types for the rcal crate.

use std::path::PathBuf;

use crate::events::Position;

/// Error type for date construction and conversion.
///
/// `InvalidMonth`, `InvalidDay` and `InvalidRecurringDay` cover out-of-range date input,
/// `DayOfYearOutOfRange` and `RealDateOutOfRange` cover results that do not
/// fit the target calendar, and the parse variants cover textual input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month index is outside 0..=12.
    #[error("invalid month index: {month_index} (must be 0..=12)")]
    InvalidMonth {
        /// The invalid month index that was provided.
        month_index: u8,
    },

    /// Returned when a day does not exist in the given month and year.
    #[error("invalid day: {day} for {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number.
        day: u8,
        /// Name of the month the day was checked against.
        month: &'static str,
        /// Fictional year the day was checked against.
        year: i32,
        /// Largest valid day for that month and year.
        max_day: u8,
    },

    /// Returned when a recurring day does not exist in the given month in any year.
    #[error("invalid day: {day} for {month} (max {max_day})")]
    InvalidRecurringDay {
        /// The invalid day number.
        day: u8,
        /// Name of the month the day was checked against.
        month: &'static str,
        /// Largest day the month can hold.
        max_day: u8,
    },

    /// Returned when a day-of-year is zero or exceeds the year length.
    #[error("day of year {day_of_year} is outside year {year} (1..={year_length})")]
    DayOfYearOutOfRange {
        /// The offending day-of-year.
        day_of_year: u16,
        /// Fictional year.
        year: i32,
        /// Number of days in that year.
        year_length: u16,
    },

    /// Returned when a conversion lands outside the representable real calendar.
    #[error("year {year} cannot be represented as a real date")]
    RealDateOutOfRange {
        /// Fictional year of the rejected input.
        year: i32,
    },

    /// Returned when a month name is not one of the thirteen Rectitude months.
    #[error("unknown month name: {name:?}")]
    UnknownMonth {
        /// The name that failed to match.
        name: String,
    },

    /// Returned when an event position key cannot be parsed.
    #[error("invalid position {input:?}: expected \"<day> <Month>\" or \"<day> <Month>, An <year>\"")]
    InvalidPosition {
        /// The text that failed to parse.
        input: String,
    },
}

/// Error type for custom event mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Returned by edit and delete when no custom event exists at the position.
    #[error("no custom event at {position}")]
    NotFound {
        /// The position that was looked up.
        position: Position,
    },
}

/// Error type for reading and writing custom event files.
#[derive(Debug, thiserror::Error)]
pub enum EventFileError {
    /// Returned when the file extension is not `.md`, `.csv` or `.json`.
    #[error("unsupported event file {}: expected .md, .csv or .json", path.display())]
    UnsupportedFormat {
        /// The rejected path.
        path: PathBuf,
    },

    /// Returned when the file cannot be read or written.
    #[error("cannot access event file {}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a line or row names an impossible date.
    #[error("line {line}: {source}")]
    InvalidEntry {
        /// One-based line number (row number for CSV).
        line: usize,
        /// The date or position error.
        #[source]
        source: CalendarError,
    },

    /// Returned when a JSON event names an impossible date.
    #[error("{month}[{index}]: {source}")]
    InvalidJsonEntry {
        /// Month key the entry was listed under.
        month: String,
        /// Zero-based index within that month's array.
        index: usize,
        /// The date or position error.
        #[source]
        source: CalendarError,
    },

    /// Returned when a label with a line break is written to a line-based format.
    #[error("{position}: label spans several lines, which Markdown cannot hold")]
    MultilineLabel {
        /// Position of the offending event.
        position: Position,
    },

    /// Returned when a JSON document cannot be parsed or produced.
    #[error("invalid JSON event file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for timeline files.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// Returned when a line does not follow the entry format.
    #[error("line {line}: malformed timeline entry {text:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Returned when an entry names a day outside its year.
    #[error("line {line}: {source}")]
    Date {
        /// One-based line number.
        line: usize,
        /// The day-of-year error.
        #[source]
        source: CalendarError,
    },

    /// Returned when the file cannot be read or written.
    #[error("cannot access timeline file {}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
