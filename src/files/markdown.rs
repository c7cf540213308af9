//! Markdown event lists: one `"<day> <Month>: <label>"` line per event.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::calendar::{CalendarDate, Month};
use crate::error::{CalendarError, EventFileError};
use crate::events::{CustomEvents, Position};

static EVENT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+([^:,]+?)(?:,\s*An\s+(-?\d+))?:\s+(.+)$")
        .expect("valid markdown event regex")
});

/// Parses Markdown event lines.
///
/// Lines that do not look like events (headings, blank lines, prose) are
/// skipped, as are lines naming an unknown month. A known month with an
/// impossible day is an error.
pub fn parse(content: &str) -> Result<CustomEvents, EventFileError> {
    let mut events = CustomEvents::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let Some(caps) = EVENT_LINE_RE.captures(raw.trim()) else {
            continue;
        };
        let month_name = caps[2].trim();
        let Ok(month) = month_name.parse::<Month>() else {
            warn!(line, month = month_name, "skipping event with unknown month");
            continue;
        };
        let position = position_from_parts(&caps[1], month, caps.get(3).map(|m| m.as_str()))
            .map_err(|source| EventFileError::InvalidEntry { line, source })?;
        events.insert(position, caps[4].trim().to_string());
    }
    debug!(count = events.len(), "parsed markdown events");
    Ok(events)
}

fn position_from_parts(
    day: &str,
    month: Month,
    year: Option<&str>,
) -> Result<Position, CalendarError> {
    let invalid = || CalendarError::InvalidPosition {
        input: format!("{day} {month}"),
    };
    let day = day.parse::<u8>().map_err(|_| invalid())?;
    match year {
        Some(year) => {
            let year = year.parse::<i32>().map_err(|_| invalid())?;
            Ok(Position::Dated(CalendarDate::new(year, month, day)?))
        }
        None => Position::recurring(day, month),
    }
}

/// Renders events as Markdown lines in position order.
///
/// # Errors
///
/// Returns [`EventFileError::MultilineLabel`] for a label containing a line
/// break, since the rest of it would read back as separate lines.
pub fn render(events: &CustomEvents) -> Result<String, EventFileError> {
    let mut out = String::new();
    for (position, label) in events {
        if label.contains(['\n', '\r']) {
            return Err(EventFileError::MultilineLabel {
                position: *position,
            });
        }
        let _ = writeln!(out, "{position}: {}", label.trim());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(text: &str) -> Position {
        text.parse().unwrap()
    }

    #[test]
    fn parses_recurring_and_dated_lines() {
        let content = "# Événements\n\n15 Ordium: Fête locale\n2 Jours du Silence: Veille\n8 Fervor, An 20: Rébellion\n";
        let events = parse(content).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[&pos("15 Ordium")], "Fête locale");
        assert_eq!(events[&pos("2 Jours du Silence")], "Veille");
        assert_eq!(events[&pos("8 Fervor, An 20")], "Rébellion");
    }

    #[test]
    fn label_may_contain_colons() {
        let events = parse("3 Laboris: Réunion: salle 4").unwrap();
        assert_eq!(events[&pos("3 Laboris")], "Réunion: salle 4");
    }

    #[test]
    fn unknown_month_is_skipped() {
        let events = parse("3 Janvier: Nouvel an\n4 Laboris: ok").unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn impossible_day_is_an_error() {
        let err = parse("\n31 Ordium: trop tard").unwrap_err();
        assert!(matches!(
            err,
            EventFileError::InvalidEntry {
                line: 2,
                source: CalendarError::InvalidRecurringDay { day: 31, .. }
            }
        ));
    }

    #[test]
    fn later_line_overwrites_earlier() {
        let events = parse("1 Fervor: a\n1 Fervor: b").unwrap();
        assert_eq!(events[&pos("1 Fervor")], "b");
    }

    #[test]
    fn render_then_parse_preserves_events() {
        let mut events = CustomEvents::new();
        events.insert(pos("15 Ordium"), "Fondation".to_string());
        events.insert(pos("5 Jours du Silence"), "Grand Apurement".to_string());
        events.insert(pos("15 Rectium, An 45"), "Naissance".to_string());
        let text = render(&events).unwrap();
        assert_eq!(
            text,
            "15 Ordium: Fondation\n5 Jours du Silence: Grand Apurement\n15 Rectium, An 45: Naissance\n"
        );
        assert_eq!(parse(&text).unwrap(), events);
    }

    #[test]
    fn multi_line_label_is_rejected() {
        let mut events = CustomEvents::new();
        events.insert(pos("15 Ordium"), "ligne un\n3 Fervor: injecte".to_string());
        assert!(matches!(
            render(&events),
            Err(EventFileError::MultilineLabel { position }) if position == pos("15 Ordium")
        ));
        events.insert(pos("15 Ordium"), "retour\rchariot".to_string());
        assert!(render(&events).is_err());
    }

    #[test]
    fn surrounding_whitespace_is_not_part_of_a_label() {
        let events = parse("15 Ordium:   Fondation   ").unwrap();
        assert_eq!(events[&pos("15 Ordium")], "Fondation");
    }
}
