//! History timeline entries.
//!
//! A timeline file holds one entry per line:
//!
//! ```text
//! AN 20-02-08 - Rébellion du Fervor | Émeutes | Port-Sud
//! ```
//!
//! The month and day are reduced to a day of the year, `(MM - 1) * 30 + DD`,
//! so month 13 addresses the Jours du Silence. Blank lines and lines starting
//! with `#` are ignored.

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info};

use crate::calendar::{CalendarDate, DAYS_PER_MONTH, from_day_of_year};
use crate::error::{CalendarError, TimelineError};

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^AN (-?\d+)-(\d+)-(\d+) - (.+?) \| (.+?) \| (.+)$")
        .expect("valid timeline entry regex")
});

/// Kind of historical event. Unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Social,
    Militaire,
    Technologique,
    Emeutes,
    Naissance,
    Mort,
    Inconnu,
    Other(String),
}

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::Social => "Social",
            Category::Militaire => "Militaire",
            Category::Technologique => "Technologique",
            Category::Emeutes => "Émeutes",
            Category::Naissance => "Naissance",
            Category::Mort => "Mort",
            Category::Inconnu => "Inconnu",
            Category::Other(name) => name,
        }
    }

    /// Display colour name, `None` for categories without one.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Category::Social => Some("blue"),
            Category::Militaire => Some("red"),
            Category::Technologique => Some("green"),
            Category::Emeutes => Some("yellow"),
            Category::Naissance => Some("magenta"),
            Category::Mort => Some("white"),
            Category::Inconnu => Some("cyan"),
            Category::Other(_) => None,
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "Social" => Category::Social,
            "Militaire" => Category::Militaire,
            "Technologique" => Category::Technologique,
            "Émeutes" => Category::Emeutes,
            "Naissance" => Category::Naissance,
            "Mort" => Category::Mort,
            "Inconnu" => Category::Inconnu,
            other => Category::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One dated event of the history timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: CalendarDate,
    pub name: String,
    pub category: Category,
    pub location: String,
}

impl HistoryEntry {
    pub fn new(
        date: CalendarDate,
        name: impl Into<String>,
        category: Category,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            category,
            location: location.into(),
        }
    }

    /// Approximate real date of the entry.
    pub fn real_date(&self) -> Result<NaiveDate, CalendarError> {
        self.date.to_real_date()
    }
}

/// Writes the entry back in file form, with the month and day normalised.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_month = u16::from(DAYS_PER_MONTH);
        let offset = self.date.day_of_year() - 1;
        write!(
            f,
            "AN {}-{:02}-{:02} - {} | {} | {}",
            self.date.year(),
            offset / per_month + 1,
            offset % per_month + 1,
            self.name,
            self.category,
            self.location
        )
    }
}

fn parse_line(line: usize, text: &str) -> Result<HistoryEntry, TimelineError> {
    let malformed = || TimelineError::Malformed {
        line,
        text: text.to_string(),
    };
    let caps = ENTRY_RE.captures(text).ok_or_else(malformed)?;
    let year: i32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u16 = caps[2].parse().map_err(|_| malformed())?;
    let day: u16 = caps[3].parse().map_err(|_| malformed())?;
    if month == 0 {
        return Err(malformed());
    }
    let day_of_year = (month - 1)
        .checked_mul(u16::from(DAYS_PER_MONTH))
        .and_then(|d| d.checked_add(day))
        .ok_or_else(malformed)?;
    let date = from_day_of_year(year, day_of_year)
        .map_err(|source| TimelineError::Date { line, source })?;
    let Ok(category) = caps[5].parse::<Category>();
    Ok(HistoryEntry::new(date, caps[4].trim(), category, caps[6].trim()))
}

/// An ordered collection of history entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<HistoryEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses timeline text.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line or out-of-range date.
    pub fn parse(content: &str) -> Result<Self, TimelineError> {
        let entries = content
            .lines()
            .enumerate()
            .map(|(index, raw)| (index + 1, raw.trim()))
            .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
            .map(|(line, text)| parse_line(line, text))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = entries.len(), "parsed timeline");
        Ok(Self { entries })
    }

    /// Loads a timeline file. A missing file yields an empty timeline.
    pub fn load(path: &Path) -> Result<Self, TimelineError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "timeline file not found, starting empty");
                Ok(Self::new())
            }
            Err(source) => Err(TimelineError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TimelineError> {
        fs::write(path, self.to_string()).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts entries by date. Entries on the same day keep their file order.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.date);
    }

    /// Every category in use, in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&&entry.category) {
                seen.push(&entry.category);
            }
        }
        seen
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
