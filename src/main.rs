mod cli;
mod config;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};

use rcal::calendar::{self, CalendarDate};
use rcal::events::{CeremonyCatalog, CustomEvents, EventStore, merge};
use rcal::files;
use rcal::navigation::{Navigator, ViewCursor};
use rcal::render::{self, RenderOptions};
use rcal::timeline::Timeline;

use crate::cli::{
    Cli, Command, ConvertCommand, EventAction, EventArgs, ExportArgs, ShowArgs, TimelineArgs,
};
use crate::config::RcalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RcalConfig::load(&cli.config)?;
    let catalog = CeremonyCatalog::rectitude();

    match cli.command {
        Command::Show(args) => show(args, &config, &catalog),
        Command::Convert(command) => convert(command),
        Command::Event(args) => event(args, &config, &catalog),
        Command::Export(args) => export(args, &config, &catalog),
        Command::Timeline(args) => timeline(args, &config),
    }
}

fn today() -> CalendarDate {
    calendar::from_real_date(Local::now().date_naive())
}

fn load_customs(path: &Path) -> Result<CustomEvents> {
    files::load(path).with_context(|| format!("failed to load events: {}", path.display()))
}

fn show(args: ShowArgs, config: &RcalConfig, catalog: &CeremonyCatalog) -> Result<()> {
    let today = today();
    let start = ViewCursor::new(
        args.year.unwrap_or(today.year()),
        args.month.unwrap_or(today.month()),
    );
    let events_file = args.events.as_deref().unwrap_or(&config.events.file);
    let store = EventStore::with_customs(catalog, load_customs(events_file)?);

    let num_months = args.months.unwrap_or(config.display.num_months).max(1);
    info!(%start, num_months, "showing calendar");

    let mut navigator = Navigator::at(start);
    let mut views = vec![navigator.month_view(&store)];
    for _ in 1..num_months {
        navigator.next();
        views.push(navigator.month_view(&store));
    }

    let options = RenderOptions {
        columns: args.columns.unwrap_or(config.display.columns),
        color: config.display.color && !args.no_color,
        today_color: config.display.today_color.clone(),
        today: Some(today),
    };

    if !args.events_only {
        print!("{}", render::calendars(&views, &options));
    }
    if !args.calendar_only {
        if !args.events_only {
            println!();
        }
        print!("{}", render::events_panel(&views, &options));
    }
    Ok(())
}

fn convert(command: ConvertCommand) -> Result<()> {
    match command {
        ConvertCommand::ToReal { year, month, day } => {
            let date = CalendarDate::new(year, month, day)?;
            if month.is_silence() {
                warn!("Jours du Silence share real dates with the following Ordium");
            }
            let real = calendar::to_real_date(year, month.index(), day)?;
            println!("{date} -> {}", real.format("%Y-%m-%d"));
        }
        ConvertCommand::FromReal { date } => {
            println!("{} -> {}", date.format("%Y-%m-%d"), calendar::from_real_date(date));
        }
        ConvertCommand::DayOfYear { year, day } => {
            let date = calendar::from_day_of_year(year, day)?;
            println!("day {day} of An {year} -> {date}");
        }
    }
    Ok(())
}

fn event(args: EventArgs, config: &RcalConfig, catalog: &CeremonyCatalog) -> Result<()> {
    let path = args.events.unwrap_or_else(|| config.events.file.clone());
    let mut store = EventStore::with_customs(catalog, load_customs(&path)?);

    match args.action {
        EventAction::Add { position, label } => {
            if let Some(previous) = store.add(position, label.clone()) {
                info!(%position, %previous, "replaced custom event");
            }
            save_customs(&path, store.customs())?;
            println!("added {position}: {label}");
        }
        EventAction::Edit { position, label } => {
            let previous = store.edit(&position, label.clone())?;
            save_customs(&path, store.customs())?;
            println!("edited {position}: {previous} -> {label}");
        }
        EventAction::Delete { position } => {
            let removed = store.delete(&position)?;
            save_customs(&path, store.customs())?;
            println!("deleted {position}: {removed}");
        }
        EventAction::List => {
            for record in store.merged() {
                let marker = if record.is_custom() { '*' } else { ' ' };
                println!("{marker} {}: {}", record.position, record.label);
            }
        }
    }
    Ok(())
}

fn save_customs(path: &Path, events: &CustomEvents) -> Result<()> {
    files::save(path, events).with_context(|| format!("failed to save events: {}", path.display()))
}

fn export(args: ExportArgs, config: &RcalConfig, catalog: &CeremonyCatalog) -> Result<()> {
    let events_file = args.events.as_deref().unwrap_or(&config.events.file);
    let customs = load_customs(events_file)?;

    // Built-ins sort before customs at a shared position, so customs overwrite them here.
    let events: CustomEvents = if args.with_builtins {
        merge(catalog, &customs)
            .into_iter()
            .map(|record| (record.position, record.label))
            .collect()
    } else {
        customs
    };

    save_customs(&args.output, &events)?;
    info!(path = %args.output.display(), count = events.len(), "exported events");
    println!("wrote {} events to {}", events.len(), args.output.display());
    Ok(())
}

fn timeline(args: TimelineArgs, config: &RcalConfig) -> Result<()> {
    let mut timeline = Timeline::load(&args.file)
        .with_context(|| format!("failed to load timeline: {}", args.file.display()))?;
    timeline.sort();
    info!(entries = timeline.len(), "showing timeline");

    let options = RenderOptions {
        color: config.display.color && !args.no_color,
        ..RenderOptions::default()
    };
    print!("{}", render::timeline(&timeline, &options));
    Ok(())
}
