//! Integration tests for the event store, navigation and display strings.

use rcal::calendar::{CalendarDate, Month};
use rcal::events::format::{format_all, format_day};
use rcal::events::{CeremonyCatalog, EventSource, EventStore, Position};
use rcal::navigation::{Navigator, ViewCursor};
use rcal::StoreError;

fn pos(text: &str) -> Position {
    text.parse().unwrap()
}

#[test]
fn add_lookup_delete_cycle() {
    let catalog = CeremonyCatalog::default();
    let mut store = EventStore::new(&catalog);

    store.add(pos("15 Ordium"), "Test");
    let records = store.lookup(&pos("15 Ordium"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "Test");

    store.delete(&pos("15 Ordium")).unwrap();
    assert!(store.lookup(&pos("15 Ordium")).is_empty());
}

#[test]
fn builtin_precedence_for_tenth_of_laboris() {
    let catalog = CeremonyCatalog::rectitude();
    let store = EventStore::new(&catalog);
    let records = store.lookup(&pos("10 Laboris"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "100e jour de l'année");
    assert_eq!(records[0].source, EventSource::Builtin);
}

#[test]
fn edit_and_delete_require_a_custom_event() {
    let catalog = CeremonyCatalog::rectitude();
    let mut store = EventStore::new(&catalog);
    assert!(matches!(
        store.edit(&pos("15 Ordium"), "x"),
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete(&pos("3 Fervor")),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn custom_event_wins_the_display_slot() {
    let catalog = CeremonyCatalog::rectitude();
    let mut store = EventStore::new(&catalog);
    store.add(pos("15 Ordium"), "Anniversaire");
    let date = CalendarDate::new(3, Month::Ordium, 15).unwrap();
    let records = store.lookup_date(date);
    assert_eq!(format_day(15, &records), "15 : Anniversaire");
    assert_eq!(
        format_all(15, &records),
        ["15 : Cérémonie de la Fondation", "15 : Anniversaire"]
    );
}

#[test]
fn dated_event_shows_only_in_its_year() {
    let catalog = CeremonyCatalog::rectitude();
    let store = EventStore::new(&catalog);
    let in_year = CalendarDate::new(20, Month::Fervor, 8).unwrap();
    let other_year = CalendarDate::new(21, Month::Fervor, 8).unwrap();
    assert_eq!(store.lookup_date(in_year).len(), 1);
    assert!(store.lookup_date(other_year).is_empty());
}

#[test]
fn merged_is_sorted_and_keeps_both_sources() {
    let catalog = CeremonyCatalog::rectitude();
    let mut store = EventStore::new(&catalog);
    store.add(pos("15 Ordium"), "Custom");
    let merged = store.merged();
    assert_eq!(merged.len(), catalog.len() + 1);
    assert!(merged.windows(2).all(|w| {
        (w[0].position, w[0].source) <= (w[1].position, w[1].source)
    }));
    let at_foundation: Vec<EventSource> = merged
        .iter()
        .filter(|r| r.position == pos("15 Ordium"))
        .map(|r| r.source)
        .collect();
    assert_eq!(at_foundation, [EventSource::Builtin, EventSource::Custom]);
}

#[test]
fn navigation_wraps_across_years() {
    let mut nav = Navigator::new();
    assert_eq!(nav.prev(), ViewCursor::new(-1, Month::Silence));
    assert_eq!(nav.next(), ViewCursor::new(0, Month::Ordium));

    let mut nav = Navigator::at(ViewCursor::new(0, Month::Silence));
    assert_eq!(nav.next(), ViewCursor::new(1, Month::Ordium));
}

#[test]
fn month_view_reflects_store_contents() {
    let catalog = CeremonyCatalog::default();
    let mut store = EventStore::new(&catalog);
    store.add(pos("3 Prudium"), "Réunion");
    let nav = Navigator::at(ViewCursor::new(7, Month::Prudium));
    let view = nav.month_view(&store);
    let days: Vec<u8> = view.event_days().map(|d| d.date.day()).collect();
    assert_eq!(days, [3]);
}
