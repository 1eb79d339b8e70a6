use crate::models::event::{EventDraft, EventId};
use chrono::NaiveDate;

/// Where a dialog save lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    New { date: NaiveDate },
    Existing { id: EventId, date: NaiveDate },
}

impl SaveTarget {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::New { date } | Self::Existing { date, .. } => *date,
        }
    }

    pub fn event_id(&self) -> Option<EventId> {
        match self {
            Self::New { .. } => None,
            Self::Existing { id, .. } => Some(*id),
        }
    }
}

/// Lifecycle of the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    EditingNew {
        date: NaiveDate,
        draft: EventDraft,
    },
    EditingExisting {
        id: EventId,
        date: NaiveDate,
        draft: EventDraft,
    },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::EditingExisting { .. } => "Edit Event",
            _ => "Add Event",
        }
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        match self {
            Self::Closed => None,
            Self::EditingNew { draft, .. } | Self::EditingExisting { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match self {
            Self::Closed => None,
            Self::EditingNew { draft, .. } | Self::EditingExisting { draft, .. } => Some(draft),
        }
    }

    pub fn target(&self) -> Option<SaveTarget> {
        match self {
            Self::Closed => None,
            Self::EditingNew { date, .. } => Some(SaveTarget::New { date: *date }),
            Self::EditingExisting { id, date, .. } => Some(SaveTarget::Existing {
                id: *id,
                date: *date,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_dialog_has_no_draft() {
        let mut dialog = DialogState::default();
        assert!(!dialog.is_open());
        assert!(dialog.draft().is_none());
        assert!(dialog.draft_mut().is_none());
        assert!(dialog.target().is_none());
    }

    #[test]
    fn test_headings_and_targets() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let new = DialogState::EditingNew {
            date,
            draft: EventDraft::default(),
        };
        let existing = DialogState::EditingExisting {
            id: EventId(4),
            date,
            draft: EventDraft::default(),
        };

        assert_eq!(new.heading(), "Add Event");
        assert_eq!(existing.heading(), "Edit Event");
        assert_eq!(new.target(), Some(SaveTarget::New { date }));
        assert_eq!(
            existing.target().and_then(|t| t.event_id()),
            Some(EventId(4))
        );
    }
}
