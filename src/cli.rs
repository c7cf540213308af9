use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use rcal::calendar::Month;
use rcal::events::Position;

/// Rectitude calendar with ceremonies and custom events.
#[derive(Parser)]
#[command(
    name = "rcal",
    version,
    about = "Rectitude calendar with ceremonies and custom events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "rcal.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Display month grids and their events.
    Show(ShowArgs),
    /// Convert between Rectitude and real dates.
    #[command(subcommand)]
    Convert(ConvertCommand),
    /// Add, edit, delete or list custom events.
    Event(EventArgs),
    /// Write custom events to another file; the format follows the extension.
    Export(ExportArgs),
    /// List a history timeline file in chronological order.
    Timeline(TimelineArgs),
}

/// Month given by name ("Ordium", "Jours du Silence") or number (1..=13).
pub fn parse_month(s: &str) -> Result<Month, String> {
    match s.trim().parse::<u8>() {
        Ok(number @ 1..=13) => Month::from_index(number - 1).map_err(|e| e.to_string()),
        Ok(number) => Err(format!("month number {number} is outside 1..=13")),
        Err(_) => s.parse::<Month>().map_err(|e| e.to_string()),
    }
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct ShowArgs {
    /// Start year (An). Defaults to the current Rectitude year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Start month, by name or number. Defaults to the current month.
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,

    /// Number of months to display.
    #[arg(short = 'n', long)]
    pub months: Option<usize>,

    /// Calendars per row when several months are shown.
    #[arg(long)]
    pub columns: Option<usize>,

    /// Override the custom events file from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Show only the calendar grid.
    #[arg(long, conflicts_with = "events_only")]
    pub calendar_only: bool,

    /// Show only the events panel.
    #[arg(long)]
    pub events_only: bool,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,
}

/// Conversions between the two calendars.
#[derive(Subcommand)]
pub enum ConvertCommand {
    /// Rectitude date to real date.
    #[command(allow_negative_numbers = true)]
    ToReal {
        year: i32,
        #[arg(value_parser = parse_month)]
        month: Month,
        day: u8,
    },
    /// Real date (YYYY-MM-DD) to Rectitude date.
    FromReal { date: NaiveDate },
    /// Day of the year (1-based) to Rectitude date.
    #[command(allow_negative_numbers = true)]
    DayOfYear { year: i32, day: u16 },
}

/// Arguments for the `event` subcommand.
#[derive(clap::Args)]
pub struct EventArgs {
    /// Override the custom events file from config.
    #[arg(short, long, global = true)]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub action: EventAction,
}

/// Custom event operations. Positions read "15 Ordium" or "15 Ordium, An 3".
#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event, replacing any custom event at the same position.
    Add { position: Position, label: String },
    /// Change the label of an existing custom event.
    Edit { position: Position, label: String },
    /// Remove a custom event.
    Delete { position: Position },
    /// List built-in and custom events in calendar order.
    List,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Output file (.md, .csv or .json).
    pub output: PathBuf,

    /// Override the custom events file from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Include the built-in ceremonies; custom labels win on shared positions.
    #[arg(long)]
    pub with_builtins: bool,
}

/// Arguments for the `timeline` subcommand.
#[derive(clap::Args)]
pub struct TimelineArgs {
    /// Timeline file with `AN <year>-<MM>-<DD> - <event> | <category> | <location>` lines.
    pub file: PathBuf,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,
}
