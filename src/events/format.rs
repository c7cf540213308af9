//! Display strings for a day's events.
//!
//! These are pure functions: the same text feeds the terminal panel, file
//! exports and timeline labels.

use crate::events::EventRecord;

/// The event shown when only one slot is available.
///
/// A custom event takes priority over a built-in one; among several customs
/// the last wins.
pub fn primary(events: &[EventRecord]) -> Option<&EventRecord> {
    events
        .iter()
        .rev()
        .find(|e| e.is_custom())
        .or_else(|| events.first())
}

/// Formats the primary event of `day` as `"DD : label"`.
///
/// Returns an empty string when `events` is empty.
pub fn format_day(day: u8, events: &[EventRecord]) -> String {
    match primary(events) {
        Some(event) => format!("{day:02} : {}", event.label),
        None => String::new(),
    }
}

/// Formats every event of `day`, one `"DD : label"` line each.
pub fn format_all(day: u8, events: &[EventRecord]) -> Vec<String> {
    events
        .iter()
        .map(|event| format!("{day:02} : {}", event.label))
        .collect()
}
