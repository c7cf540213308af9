//! CSV event rows: `day,month,label[,year]`.

use tracing::{debug, warn};

use crate::calendar::{CalendarDate, Month};
use crate::error::{CalendarError, EventFileError};
use crate::events::{CustomEvents, Position};

/// One CSV record and the line it starts on.
struct Record {
    line: usize,
    fields: Vec<String>,
}

impl Record {
    fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.trim().is_empty())
    }
}

/// Splits CSV text into records.
///
/// Fields may be wrapped in double quotes; a doubled quote inside a quoted
/// field stands for one quote character. Line breaks inside quotes belong to
/// the field, so one record can span several lines.
fn split_records(content: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                fields.push(std::mem::take(&mut field));
                records.push(Record {
                    line: start,
                    fields: std::mem::take(&mut fields),
                });
                line += 1;
                start = line;
            }
            ('\n', true) => {
                field.push(c);
                line += 1;
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(Record {
            line: start,
            fields,
        });
    }
    records
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parses CSV rows into custom events.
///
/// Rows with fewer than three fields and rows naming an unknown month are
/// skipped. An optional fourth field holds the year of a dated event. Labels
/// are trimmed; a quoted label may span several lines. Errors report the line
/// the row starts on.
pub fn parse(content: &str) -> Result<CustomEvents, EventFileError> {
    let mut events = CustomEvents::new();
    for record in split_records(content) {
        let line = record.line;
        if record.is_blank() {
            continue;
        }
        let fields = record.fields;
        if fields.len() < 3 {
            debug!(line, "skipping short CSV row");
            continue;
        }
        let month_name = fields[1].trim();
        let Ok(month) = month_name.parse::<Month>() else {
            warn!(line, month = month_name, "skipping event with unknown month");
            continue;
        };
        let year = fields.get(3).map(|y| y.trim()).filter(|y| !y.is_empty());
        let position = position_from_fields(fields[0].trim(), month, year)
            .map_err(|source| EventFileError::InvalidEntry { line, source })?;
        events.insert(position, fields[2].trim().to_string());
    }
    debug!(count = events.len(), "parsed CSV events");
    Ok(events)
}

fn position_from_fields(
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

/// Renders events as CSV rows in position order.
pub fn render(events: &CustomEvents) -> String {
    let mut out = String::new();
    for (position, label) in events {
        out.push_str(&position.day().to_string());
        out.push(',');
        out.push_str(&quote(position.month().name()));
        out.push(',');
        out.push_str(&quote(label));
        if let Some(year) = position.year() {
            out.push(',');
            out.push_str(&year.to_string());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(text: &str) -> Position {
        text.parse().unwrap()
    }

    fn fields(content: &str) -> Vec<Vec<String>> {
        split_records(content).into_iter().map(|r| r.fields).collect()
    }

    #[test]
    fn split_plain_fields() {
        assert_eq!(fields("15,Ordium,Fondation"), [["15", "Ordium", "Fondation"]]);
    }

    #[test]
    fn split_quoted_fields() {
        assert_eq!(
            fields(r#"3,Laboris,"Réunion, salle ""A""""#),
            [["3", "Laboris", r#"Réunion, salle "A""#]]
        );
    }

    #[test]
    fn split_keeps_empty_trailing_field() {
        assert_eq!(fields("1,Fervor,x,\n"), [["1", "Fervor", "x", ""]]);
    }

    #[test]
    fn quoted_line_break_stays_in_field() {
        let records = split_records("1,Fervor,\"a\r\nb\"\r\n2,Fervor,c\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields[2], "a\r\nb");
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].fields, ["2", "Fervor", "c"]);
    }

    #[test]
    fn parses_rows() {
        let events = parse("15,Ordium,Fondation\n2,Jours du Silence,Veille\n8,Fervor,Rébellion,20\n").unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[&pos("8 Fervor, An 20")], "Rébellion");
        assert_eq!(events[&pos("2 Jours du Silence")], "Veille");
    }

    #[test]
    fn short_and_unknown_rows_skipped() {
        let events = parse("15,Ordium\n1,Brumaire,x\n4,Valoris,ok").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[&pos("4 Valoris")], "ok");
    }

    #[test]
    fn bad_day_reports_row() {
        let err = parse("15,Ordium,ok\nquinze,Ordium,ko").unwrap_err();
        assert!(matches!(
            err,
            EventFileError::InvalidEntry {
                line: 2,
                source: CalendarError::InvalidPosition { .. }
            }
        ));
    }

    #[test]
    fn render_then_parse_preserves_events() {
        let mut events = CustomEvents::new();
        events.insert(pos("15 Ordium"), "Fondation, acte I".to_string());
        events.insert(pos("4 Jours du Silence"), "Réveil".to_string());
        events.insert(pos("1 Ordium, An -2"), "Avant la Rectitude".to_string());
        let text = render(&events);
        assert_eq!(
            text,
            "15,Ordium,\"Fondation, acte I\"\n4,Jours du Silence,Réveil\n1,Ordium,Avant la Rectitude,-2\n"
        );
        assert_eq!(parse(&text).unwrap(), events);
    }

    #[test]
    fn multi_line_label_survives_render_and_parse() {
        let mut events = CustomEvents::new();
        events.insert(pos("15 Ordium"), "ligne un\nligne deux".to_string());
        events.insert(pos("3 Fervor"), "suite".to_string());
        let text = render(&events);
        assert_eq!(text, "15,Ordium,\"ligne un\nligne deux\"\n3,Fervor,suite\n");
        assert_eq!(parse(&text).unwrap(), events);
    }

    #[test]
    fn error_after_multi_line_row_reports_starting_line() {
        let err = parse("1,Ordium,\"a\nb\"\n31,Ordium,ko\n").unwrap_err();
        assert!(matches!(err, EventFileError::InvalidEntry { line: 3, .. }));
    }

    #[test]
    fn labels_are_trimmed() {
        let events = parse("15,Ordium,  Fondation  \n3,Fervor,\" entre guillemets \"").unwrap();
        assert_eq!(events[&pos("15 Ordium")], "Fondation");
        assert_eq!(events[&pos("3 Fervor")], "entre guillemets");
    }
}
