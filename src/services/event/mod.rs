//! In-memory event store.
//! Holds the ordered event collection; bucketing queries and the save/move
//! transactions live in focused submodules.

use crate::models::event::{Event, EventDraft, EventId};
use chrono::NaiveDate;
use thiserror::Error;

pub mod crud;
pub mod queries;

pub use queries::{bucket, overflow_count};

/// Errors raised by store transactions. A failed transaction never mutates
/// the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event title and time are required")]
    IncompleteDraft,

    #[error("Event {0} not found")]
    EventNotFound(EventId),

    #[error("No event at position {index} on {date}")]
    BucketIndexOutOfRange { date: NaiveDate, index: usize },
}

/// Result of a move transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The event already lives on the destination date
    Unchanged,
}

/// Ordered collection of events.
///
/// Store order is irrelevant to display (buckets are re-sorted by time) and
/// only changes when an event is appended or moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from drafts and their dates, assigning ids in order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (EventDraft, NaiveDate)>,
    {
        let mut store = Self::new();
        for (draft, date) in records {
            store.push(draft, date);
        }
        store
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Current position of an event in store order
    pub fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Append without validation; callers go through `save` for user input.
    pub(crate) fn push(&mut self, draft: EventDraft, date: NaiveDate) -> EventId {
        let id = self.allocate_id();
        self.events.push(draft.into_event(id, date));
        id
    }

    fn allocate_id(&mut self) -> EventId {
        self.next_id += 1;
        EventId(self.next_id)
    }
}
