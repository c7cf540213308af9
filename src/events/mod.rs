//! Built-in ceremonies, custom events and their lookup.

mod catalog;
pub mod format;
mod position;
mod store;

pub use catalog::CeremonyCatalog;
pub use position::{AnnualDay, Position};
pub use store::{CustomEvents, EventRecord, EventSource, EventStore, merge};
