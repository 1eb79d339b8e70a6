// Event module
// Calendar event model and the transient form draft used by the event dialog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned to an event when it enters the store.
///
/// Identifiers are never reused, so two events sharing date, title and time
/// remain distinguishable after edits and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub(crate) u64);

impl EventId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A scheduled item on a single calendar day.
///
/// `time` and `duration` are free-form text ("HH:MM", "1h"); only `date` is a
/// real calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub time: String,
    pub duration: String,
    pub date: NaiveDate,
}

impl Event {
    /// Text shown on the event chip inside a day cell
    pub fn label(&self) -> String {
        format!("{} - {}", self.time, self.title)
    }

    /// Hover text with the full event details
    pub fn tooltip(&self) -> String {
        format!("{} {} ({})", self.title, self.time, self.duration)
    }

    /// Same record content, ignoring the identifier
    pub fn same_content(&self, other: &Event) -> bool {
        self.title == other.title
            && self.time == other.time
            && self.duration == other.duration
            && self.date == other.date
    }
}

/// Editable fields of the create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub duration: String,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            duration: duration.into(),
        }
    }

    /// Prefill a draft from an existing event
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            time: event.time.clone(),
            duration: event.duration.clone(),
        }
    }

    /// A draft can be saved once it has a title and a time.
    /// Duration is optional and kept verbatim, including an empty string.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.time.trim().is_empty()
    }

    pub fn into_event(self, id: EventId, date: NaiveDate) -> Event {
        Event {
            id,
            title: self.title,
            time: self.time,
            duration: self.duration,
            date,
        }
    }
}
