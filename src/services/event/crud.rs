use super::{EventStore, MoveOutcome, StoreError};
use crate::models::event::{EventDraft, EventId};
use chrono::NaiveDate;

impl EventStore {
    /// Create or replace an event from a dialog draft.
    ///
    /// With a `target`, the record keeps its id and position and every field
    /// is replaced by the draft plus `date`. Without one, a new record is
    /// appended. Incomplete drafts are rejected before anything is touched.
    pub fn save(
        &mut self,
        draft: &EventDraft,
        date: NaiveDate,
        target: Option<EventId>,
    ) -> Result<EventId, StoreError> {
        if !draft.is_complete() {
            return Err(StoreError::IncompleteDraft);
        }

        match target {
            Some(id) => {
                let position = self.position(id).ok_or(StoreError::EventNotFound(id))?;
                self.events[position] = draft.clone().into_event(id, date);
                Ok(id)
            }
            None => Ok(self.push(draft.clone(), date)),
        }
    }

    /// Reschedule an event onto `dest`.
    ///
    /// The record is taken out of its position and appended at the end of the
    /// store with its date overwritten. Every other record keeps its relative
    /// order.
    pub fn move_event(&mut self, id: EventId, dest: NaiveDate) -> Result<MoveOutcome, StoreError> {
        let position = self.position(id).ok_or(StoreError::EventNotFound(id))?;
        if self.events[position].date == dest {
            return Ok(MoveOutcome::Unchanged);
        }

        let mut event = self.events.remove(position);
        event.date = dest;
        self.events.push(event);
        Ok(MoveOutcome::Moved)
    }

    /// Positional form of [`EventStore::move_event`]: the event is addressed
    /// by its index within the `source` bucket as it was rendered.
    pub fn move_from_bucket(
        &mut self,
        source: NaiveDate,
        index: usize,
        dest: NaiveDate,
    ) -> Result<MoveOutcome, StoreError> {
        let id = self
            .event_at(source, index)
            .ok_or(StoreError::BucketIndexOutOfRange { date: source, index })?;
        self.move_event(id, dest)
    }
}
