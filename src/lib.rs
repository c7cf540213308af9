//! The Rectitude calendar: thirteen months, a fixed epoch in 1972 and a
//! catalog of ceremonies.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`calendar`] | Months, dates, leap rule and real-date conversion |
//! | [`events`] | Built-in ceremonies, custom events and display strings |
//! | [`navigation`] | Month cursor and per-month day listings |
//! | [`files`] | Markdown, CSV and JSON event files |
//! | [`timeline`] | History timeline entries |
//! | [`render`] | Terminal text for grids, panels and timelines |
//!
//! ```
//! use rcal::calendar::{CalendarDate, Month};
//! use rcal::events::{CeremonyCatalog, EventStore};
//!
//! let catalog = CeremonyCatalog::rectitude();
//! let mut store = EventStore::new(&catalog);
//! store.add("15 Ordium".parse().unwrap(), "Test");
//!
//! let date = CalendarDate::new(3, Month::Ordium, 15).unwrap();
//! assert_eq!(store.lookup_date(date).len(), 2);
//! ```

pub mod calendar;
pub mod error;
pub mod events;
pub mod files;
pub mod navigation;
pub mod render;
pub mod timeline;

pub use error::{CalendarError, EventFileError, StoreError, TimelineError};
