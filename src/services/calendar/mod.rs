//! View state and command dispatch for the month calendar.
//!
//! Every user interaction becomes a [`Command`] applied to [`CalendarState`].
//! Nothing in here depends on the rendering layer.

use crate::models::event::{EventDraft, EventId};
use crate::services::event::{EventStore, MoveOutcome, StoreError};
use crate::utils::date::shift_month;
use chrono::{Local, NaiveDate};

mod state;

pub use state::{DialogState, SaveTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the dialog for a new event on `date`
    OpenCreate { date: NaiveDate },
    /// Open the dialog prefilled with an existing event
    OpenEdit { id: EventId },
    Save { draft: EventDraft, target: SaveTarget },
    Cancel,
    /// Drag-and-drop reschedule
    Move { id: EventId, new_date: NaiveDate },
    /// Shift the displayed month by `delta` months
    Navigate { delta: i32 },
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing changed
    Unchanged,
    /// The event store was mutated
    StoreChanged,
    /// Only view state (month, dialog) changed
    ViewChanged,
    /// The command was refused; state is untouched
    Rejected,
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub store: EventStore,
    /// Any day inside the month on screen
    pub selected_month: NaiveDate,
    pub dialog: DialogState,
}

impl CalendarState {
    pub fn new(store: EventStore, selected_month: NaiveDate) -> Self {
        Self {
            store,
            selected_month,
            dialog: DialogState::Closed,
        }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        log::debug!("Applying command {:?}", command);

        match command {
            Command::OpenCreate { date } => {
                self.dialog = DialogState::EditingNew {
                    date,
                    draft: EventDraft::default(),
                };
                CommandOutcome::ViewChanged
            }
            Command::OpenEdit { id } => match self.store.get(id) {
                Some(event) => {
                    self.dialog = DialogState::EditingExisting {
                        id,
                        date: event.date,
                        draft: EventDraft::from_event(event),
                    };
                    CommandOutcome::ViewChanged
                }
                None => {
                    log::warn!("Cannot edit event {}: not in store", id);
                    CommandOutcome::Rejected
                }
            },
            Command::Save { draft, target } => self.save(draft, target),
            Command::Cancel => {
                if self.dialog.is_open() {
                    self.dialog = DialogState::Closed;
                    CommandOutcome::ViewChanged
                } else {
                    CommandOutcome::Unchanged
                }
            }
            Command::Move { id, new_date } => match self.store.move_event(id, new_date) {
                Ok(MoveOutcome::Moved) => {
                    log::info!("Moved event {} to {}", id, new_date);
                    CommandOutcome::StoreChanged
                }
                Ok(MoveOutcome::Unchanged) => CommandOutcome::Unchanged,
                Err(err) => {
                    log::warn!("Move rejected: {}", err);
                    CommandOutcome::Rejected
                }
            },
            Command::Navigate { delta } => {
                if delta == 0 {
                    return CommandOutcome::Unchanged;
                }
                self.selected_month = shift_month(self.selected_month, delta);
                CommandOutcome::ViewChanged
            }
            Command::Today => {
                let today = Local::now().date_naive();
                if self.selected_month == today {
                    return CommandOutcome::Unchanged;
                }
                self.selected_month = today;
                CommandOutcome::ViewChanged
            }
        }
    }

    fn save(&mut self, draft: EventDraft, target: SaveTarget) -> CommandOutcome {
        match self.store.save(&draft, target.date(), target.event_id()) {
            Ok(id) => {
                log::info!("Saved event {} on {}", id, target.date());
                self.dialog = DialogState::Closed;
                CommandOutcome::StoreChanged
            }
            Err(StoreError::IncompleteDraft) => {
                // the dialog stays open with whatever the user typed
                log::debug!("Save blocked: title and time are required");
                CommandOutcome::Rejected
            }
            Err(err) => {
                log::warn!("Save rejected: {}", err);
                CommandOutcome::Rejected
            }
        }
    }
}
