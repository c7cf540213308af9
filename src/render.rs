//! Terminal output: month grids, event panels and timeline listings.
//!
//! Every function returns the text instead of printing it. With colour
//! disabled the output contains no escape codes and event days are marked
//! with a trailing `*`.

use crate::calendar::CalendarDate;
use crate::events::format;
use crate::navigation::{DayCell, MonthView};
use crate::timeline::Timeline;

const DAYS_PER_ROW: usize = 7;
const CELL_WIDTH: usize = 3;
const CALENDAR_WIDTH: usize = DAYS_PER_ROW * CELL_WIDTH;
const MONTH_GAP: &str = "    ";

const BOLD_CODE: &str = "\x1b[1m";
const REVERSE_CODE: &str = "\x1b[7m";
const RESET_CODE: &str = "\x1b[0m";

/// Layout and styling switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Months per row when several months are shown.
    pub columns: usize,
    pub color: bool,
    /// Background colour name for today's cell.
    pub today_color: String,
    pub today: Option<CalendarDate>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            color: false,
            today_color: "yellow".to_string(),
            today: None,
        }
    }
}

/// Maps common colour names to ANSI escape codes.
pub fn ansi_color_code(color_name: &str, is_fg: bool) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(if is_fg { "\x1b[30m" } else { "\x1b[40m" }),
        "red" => Some(if is_fg { "\x1b[31m" } else { "\x1b[41m" }),
        "green" => Some(if is_fg { "\x1b[32m" } else { "\x1b[42m" }),
        "yellow" => Some(if is_fg { "\x1b[33m" } else { "\x1b[43m" }),
        "blue" => Some(if is_fg { "\x1b[34m" } else { "\x1b[44m" }),
        "magenta" => Some(if is_fg { "\x1b[35m" } else { "\x1b[45m" }),
        "cyan" => Some(if is_fg { "\x1b[36m" } else { "\x1b[46m" }),
        "white" => Some(if is_fg { "\x1b[37m" } else { "\x1b[47m" }),
        _ => None,
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn bold(text: &str, options: &RenderOptions) -> String {
    if options.color {
        format!("{BOLD_CODE}{text}{RESET_CODE}")
    } else {
        text.to_string()
    }
}

/// Month grids laid out side by side, `options.columns` per row.
pub fn calendars(views: &[MonthView], options: &RenderOptions) -> String {
    let months_per_row = if views.len() == 1 {
        1
    } else {
        options.columns.max(1)
    };

    let mut out = String::new();
    for (row, chunk) in views.chunks(months_per_row).enumerate() {
        if row > 0 {
            out.push('\n');
        }
        month_row(chunk, options, &mut out);
    }
    out
}

fn month_row(views: &[MonthView], options: &RenderOptions, out: &mut String) {
    let headers: Vec<String> = views.iter().map(|view| header(view, options)).collect();
    push_line(out, &headers.join(MONTH_GAP));

    let weeks = views
        .iter()
        .map(|view| view.days.len().div_ceil(DAYS_PER_ROW))
        .max()
        .unwrap_or(0);
    for week in 0..weeks {
        let rows: Vec<String> = views
            .iter()
            .map(|view| week_row(view, week, options))
            .collect();
        push_line(out, &rows.join(MONTH_GAP));
    }
}

/// Month name and year centred over the grid width.
fn header(view: &MonthView, options: &RenderOptions) -> String {
    let title = view.cursor.to_string();
    let len = title.chars().count();
    let padding = CALENDAR_WIDTH.saturating_sub(len) / 2;
    let r_padding = CALENDAR_WIDTH.saturating_sub(padding + len);
    format!(
        "{}{}{}",
        " ".repeat(padding),
        bold(&title, options),
        " ".repeat(r_padding)
    )
}

fn week_row(view: &MonthView, week: usize, options: &RenderOptions) -> String {
    let mut row = String::new();
    let mut cells = 0;
    for cell in view.days.iter().skip(week * DAYS_PER_ROW).take(DAYS_PER_ROW) {
        row.push_str(&day_cell(cell, options));
        cells += 1;
    }
    row.push_str(&" ".repeat((DAYS_PER_ROW - cells) * CELL_WIDTH));
    row
}

fn day_cell(cell: &DayCell, options: &RenderOptions) -> String {
    let day = cell.date.day();
    if !options.color {
        let marker = if cell.has_events() { '*' } else { ' ' };
        return format!("{day:2}{marker}");
    }

    let mut format_codes = String::new();
    if cell.has_events() {
        format_codes.push_str(REVERSE_CODE);
    }
    if options.today == Some(cell.date) {
        format_codes.clear();
        format_codes.push_str(ansi_color_code(&options.today_color, false).unwrap_or("\x1b[43m"));
        format_codes.push_str(ansi_color_code("black", true).unwrap_or_default());
    }

    if format_codes.is_empty() {
        format!("{day:2} ")
    } else {
        format!("{format_codes}{day:2}{RESET_CODE} ")
    }
}

/// Every event of every month, followed by the real dates the month spans.
pub fn events_panel(views: &[MonthView], options: &RenderOptions) -> String {
    let mut out = String::new();
    push_line(&mut out, &bold("Events:", options));
    push_line(&mut out, &"-".repeat(CALENDAR_WIDTH * 2));

    for view in views {
        push_line(&mut out, &bold(&view.cursor.to_string(), options));
        for cell in view.event_days() {
            for line in format::format_all(cell.date.day(), &cell.events) {
                push_line(&mut out, &format!("  {line}"));
            }
        }
        if let Some((first, last)) = view.real_span() {
            push_line(
                &mut out,
                &format!(
                    "  real: {} .. {}",
                    first.format("%Y-%m-%d"),
                    last.format("%Y-%m-%d")
                ),
            );
        }
    }
    out
}

/// One line per history entry with its Rectitude and real dates.
pub fn timeline(timeline: &Timeline, options: &RenderOptions) -> String {
    let mut out = String::new();
    for entry in timeline.entries() {
        let real = entry
            .real_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| "?".to_string());
        let color = entry
            .category
            .color()
            .and_then(|name| ansi_color_code(name, true))
            .filter(|_| options.color);
        let category = match color {
            Some(code) => format!("{code}{}{RESET_CODE}", entry.category),
            None => entry.category.to_string(),
        };
        push_line(
            &mut out,
            &format!(
                "{} ({real}) - {} | {category} | {}",
                entry.date, entry.name, entry.location
            ),
        );
    }
    out
}
