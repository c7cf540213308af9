//! JSON event documents keyed by month name.
//!
//! ```json
//! {
//!   "Ordium": [{ "day": 15, "description": "Fondation" }],
//!   "Fervor": [{ "day": 8, "description": "Rébellion", "year": 20 }]
//! }
//! ```

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::calendar::{CalendarDate, Month};
use crate::error::{CalendarError, EventFileError};
use crate::events::{CustomEvents, Position};

#[derive(Debug, Serialize, Deserialize)]
struct JsonEvent {
    day: i64,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

impl JsonEvent {
    fn position(&self, month: Month) -> Result<Position, CalendarError> {
        let day = u8::try_from(self.day).map_err(|_| CalendarError::InvalidPosition {
            input: format!("{} {month}", self.day),
        })?;
        match self.year {
            Some(year) => Ok(Position::Dated(CalendarDate::new(year, month, day)?)),
            None => Position::recurring(day, month),
        }
    }
}

/// Every month in calendar order, each with its events in day order.
struct Document<'a>(&'a CustomEvents);

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Month::ALL.len()))?;
        for month in Month::ALL {
            let mut entries: Vec<(&Position, &String)> = self
                .0
                .iter()
                .filter(|(position, _)| position.month() == month)
                .collect();
            entries.sort_by_key(|(position, _)| (position.day(), position.year()));
            let events: Vec<JsonEvent> = entries
                .into_iter()
                .map(|(position, label)| JsonEvent {
                    day: i64::from(position.day()),
                    description: label.clone(),
                    year: position.year(),
                })
                .collect();
            map.serialize_entry(month.name(), &events)?;
        }
        map.end()
    }
}

/// Parses a JSON event document.
///
/// Keys that are not month names are skipped with a warning.
pub fn parse(content: &str) -> Result<CustomEvents, EventFileError> {
    let document: BTreeMap<String, Vec<JsonEvent>> = serde_json::from_str(content)?;
    let mut events = CustomEvents::new();
    for (month_name, entries) in document {
        let Ok(month) = month_name.parse::<Month>() else {
            warn!(month = %month_name, "skipping events under unknown month");
            continue;
        };
        for (index, entry) in entries.into_iter().enumerate() {
            let position = entry
                .position(month)
                .map_err(|source| EventFileError::InvalidJsonEntry {
                    month: month_name.clone(),
                    index,
                    source,
                })?;
            events.insert(position, entry.description.trim().to_string());
        }
    }
    debug!(count = events.len(), "parsed JSON events");
    Ok(events)
}

/// Renders events as a pretty-printed JSON document.
pub fn render(events: &CustomEvents) -> Result<String, EventFileError> {
    let mut text = serde_json::to_string_pretty(&Document(events))?;
    text.push('\n');
    Ok(text)
}
