// Test fixtures - reusable test data
// Provides consistent dates, drafts and stores across the test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_planner::models::event::EventDraft;
use month_planner::services::event::EventStore;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, March 5 2024
    pub fn march_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    /// Wednesday, March 6 2024
    pub fn march_6_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample stores for testing
pub mod stores {
    use super::*;

    /// The single-record store used throughout the scenarios
    pub fn standup_only() -> EventStore {
        EventStore::from_records(vec![(
            EventDraft::new("Standup", "09:00", "15m"),
            dates::march_5_2024(),
        )])
    }

    /// Three events on one day, plus one on the next
    pub fn busy_tuesday() -> EventStore {
        EventStore::from_records(vec![
            (EventDraft::new("Review", "16:00", "1h"), dates::march_5_2024()),
            (EventDraft::new("Standup", "09:00", "15m"), dates::march_5_2024()),
            (EventDraft::new("Lunch", "12:30", "1h"), dates::march_5_2024()),
            (EventDraft::new("Dentist", "08:00", "45m"), dates::march_6_2024()),
        ])
    }
}

/// Seed JSON equivalent to `stores::busy_tuesday`
pub const BUSY_TUESDAY_JSON: &str = r#"[
    {"title": "Review", "time": "16:00", "duration": "1h", "date": "2024-03-05"},
    {"title": "Standup", "time": "09:00", "duration": "15m", "date": "2024-03-05"},
    {"title": "Lunch", "time": "12:30", "duration": "1h", "date": "2024-03-05"},
    {"title": "Dentist", "time": "08:00", "duration": "45m", "date": "2024-03-06"}
]"#;
