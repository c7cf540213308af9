//! Custom events layered over the built-in catalog.

use std::collections::BTreeMap;

use tracing::debug;

use crate::calendar::CalendarDate;
use crate::error::StoreError;
use crate::events::{AnnualDay, CeremonyCatalog, Position};

/// Neutral in-memory form of the custom events: position key to label.
///
/// File adapters translate to and from this mapping.
pub type CustomEvents = BTreeMap<Position, String>;

/// Where an event record comes from.
///
/// Built-ins order before customs, which is the order [`merge`] and
/// [`EventStore::lookup`] return them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventSource {
    Builtin,
    Custom,
}

/// One event at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub position: Position,
    pub label: String,
    pub source: EventSource,
}

impl EventRecord {
    pub fn builtin(position: Position, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            source: EventSource::Builtin,
        }
    }

    pub fn custom(position: Position, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            source: EventSource::Custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.source == EventSource::Custom
    }
}

/// Deterministic union of built-in and custom events.
///
/// Records are ordered by position; at a shared position the built-in record
/// comes first. Neither input is modified.
pub fn merge(builtins: &CeremonyCatalog, customs: &CustomEvents) -> Vec<EventRecord> {
    let mut records: Vec<EventRecord> = builtins
        .iter()
        .map(|(position, label)| EventRecord::builtin(*position, label))
        .chain(
            customs
                .iter()
                .map(|(position, label)| EventRecord::custom(*position, label.clone())),
        )
        .collect();
    records.sort_by(|a, b| (a.position, a.source).cmp(&(b.position, b.source)));
    records
}

/// Built-in ceremonies plus user-defined events.
///
/// There is at most one custom event per position: [`add`](Self::add) on an
/// occupied position replaces the earlier label. Mutations take `&mut self`,
/// so concurrent callers must serialize them.
#[derive(Debug, Clone)]
pub struct EventStore<'a> {
    builtins: &'a CeremonyCatalog,
    customs: CustomEvents,
}

impl<'a> EventStore<'a> {
    pub fn new(builtins: &'a CeremonyCatalog) -> Self {
        Self::with_customs(builtins, CustomEvents::new())
    }

    /// Creates a store with previously persisted custom events.
    pub fn with_customs(builtins: &'a CeremonyCatalog, customs: CustomEvents) -> Self {
        Self { builtins, customs }
    }

    pub fn builtins(&self) -> &'a CeremonyCatalog {
        self.builtins
    }

    pub fn customs(&self) -> &CustomEvents {
        &self.customs
    }

    pub fn into_customs(self) -> CustomEvents {
        self.customs
    }

    /// Events stored at exactly `position`: the built-in one, then the custom one.
    pub fn lookup(&self, position: &Position) -> Vec<EventRecord> {
        let builtin = self
            .builtins
            .get(position)
            .map(|label| EventRecord::builtin(*position, label));
        let custom = self
            .customs
            .get(position)
            .map(|label| EventRecord::custom(*position, label.clone()));
        builtin.into_iter().chain(custom).collect()
    }

    /// Every event that shows on `date`.
    ///
    /// Combines the recurring position for the day and month with the
    /// year-qualified position for the full date, in that order.
    pub fn lookup_date(&self, date: CalendarDate) -> Vec<EventRecord> {
        let mut records = self.lookup(&Position::Recurring(AnnualDay::from(date)));
        records.extend(self.lookup(&Position::Dated(date)));
        records
    }

    /// Stores `label` at `position`, returning the label it replaced.
    ///
    /// Leading and trailing whitespace is dropped from the label.
    pub fn add(&mut self, position: Position, label: impl Into<String>) -> Option<String> {
        let label = trimmed(label.into());
        debug!(%position, %label, "adding custom event");
        let previous = self.customs.insert(position, label);
        if previous.is_some() {
            debug!(%position, "custom event overwritten");
        }
        previous
    }

    /// Replaces the label of an existing custom event, returning the old label.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no custom event exists at `position`.
    pub fn edit(
        &mut self,
        position: &Position,
        new_label: impl Into<String>,
    ) -> Result<String, StoreError> {
        let slot = self
            .customs
            .get_mut(position)
            .ok_or(StoreError::NotFound {
                position: *position,
            })?;
        let new_label = trimmed(new_label.into());
        debug!(%position, label = %new_label, "editing custom event");
        Ok(std::mem::replace(slot, new_label))
    }

    /// Removes the custom event at `position`, returning its label.
    ///
    /// Built-in events are not affected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no custom event exists at `position`.
    pub fn delete(&mut self, position: &Position) -> Result<String, StoreError> {
        let removed = self
            .customs
            .remove(position)
            .ok_or(StoreError::NotFound {
                position: *position,
            })?;
        debug!(%position, "deleted custom event");
        Ok(removed)
    }

    /// All built-in and custom events, see [`merge`].
    pub fn merged(&self) -> Vec<EventRecord> {
        merge(self.builtins, &self.customs)
    }
}

fn trimmed(label: String) -> String {
    if label.trim().len() == label.len() {
        label
    } else {
        label.trim().to_string()
    }
}
