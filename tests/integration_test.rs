// Integration tests for the calendar workflows and settings persistence
mod fixtures;

use fixtures::{dates, stores, BUSY_TUESDAY_JSON};
use month_planner::models::event::EventDraft;
use month_planner::models::settings::Settings;
use month_planner::services::calendar::{CalendarState, Command, CommandOutcome, DialogState, SaveTarget};
use month_planner::services::event::{overflow_count, MoveOutcome, StoreError};
use month_planner::services::seed::parse_seed;
use month_planner::services::settings::SettingsService;
use month_planner::utils::date::grid_range_at;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn titles(state: &CalendarState, date: chrono::NaiveDate) -> Vec<String> {
    state
        .store
        .bucket(date)
        .into_iter()
        .map(|event| event.title.clone())
        .collect()
}

#[test]
fn test_seeded_event_lands_in_its_bucket() {
    let state = CalendarState::new(stores::standup_only(), dates::march_5_2024());

    let bucket = state.store.bucket(dates::march_5_2024());
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].label(), "09:00 - Standup");
    assert!(state.store.bucket(dates::march_6_2024()).is_empty());
}

#[test]
fn test_drag_to_next_day() {
    let mut state = CalendarState::new(stores::standup_only(), dates::march_5_2024());
    let id = state.store.event_at(dates::march_5_2024(), 0).unwrap();

    let outcome = state.apply(Command::Move {
        id,
        new_date: dates::march_6_2024(),
    });

    assert_eq!(outcome, CommandOutcome::StoreChanged);
    assert!(state.store.bucket(dates::march_5_2024()).is_empty());
    assert_eq!(titles(&state, dates::march_6_2024()), vec!["Standup"]);
    assert_eq!(state.store.len(), 1);
}

#[test]
fn test_drop_on_source_day_is_a_no_op() {
    let mut store = stores::busy_tuesday();
    let before = store.clone();

    let outcome = store
        .move_from_bucket(dates::march_5_2024(), 1, dates::march_5_2024())
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert_eq!(store, before);
}

#[test]
fn test_drag_from_stale_index_is_rejected() {
    let mut store = stores::busy_tuesday();
    let before = store.clone();

    let err = store
        .move_from_bucket(dates::march_6_2024(), 5, dates::march_5_2024())
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::BucketIndexOutOfRange {
            date: dates::march_6_2024(),
            index: 5
        }
    );
    assert_eq!(store, before);
}

#[test]
fn test_busy_day_overflows_display_cap() {
    let state = CalendarState::new(stores::busy_tuesday(), dates::march_5_2024());
    let cap = Settings::default().max_visible_events;

    let bucket = state.store.bucket(dates::march_5_2024());
    assert_eq!(
        titles(&state, dates::march_5_2024()),
        vec!["Standup", "Lunch", "Review"]
    );
    assert_eq!(overflow_count(bucket.len(), cap), 1);
}

#[test]
fn test_create_then_edit_through_dialog() {
    let mut state = CalendarState::new(stores::standup_only(), dates::march_5_2024());

    state.apply(Command::OpenCreate {
        date: dates::march_6_2024(),
    });
    assert_eq!(state.dialog.heading(), "Add Event");
    if let Some(draft) = state.dialog.draft_mut() {
        *draft = EventDraft::new("Retro", "15:00", "1h");
    }
    let draft = state.dialog.draft().cloned().unwrap();
    let target = state.dialog.target().unwrap();
    assert_eq!(state.apply(Command::Save { draft, target }), CommandOutcome::StoreChanged);
    assert_eq!(state.dialog, DialogState::Closed);
    assert_eq!(state.store.len(), 2);

    let id = state.store.event_at(dates::march_6_2024(), 0).unwrap();
    state.apply(Command::OpenEdit { id });
    assert_eq!(state.dialog.heading(), "Edit Event");
    let outcome = state.apply(Command::Save {
        draft: EventDraft::new("Retro", "15:30", ""),
        target: SaveTarget::Existing {
            id,
            date: dates::march_6_2024(),
        },
    });

    assert_eq!(outcome, CommandOutcome::StoreChanged);
    assert_eq!(state.store.len(), 2);
    let edited = state.store.get(id).unwrap();
    assert_eq!(edited.time, "15:30");
    assert_eq!(edited.duration, "");
}

#[test]
fn test_incomplete_save_keeps_dialog_open() {
    let mut state = CalendarState::new(stores::standup_only(), dates::march_5_2024());
    let before = state.store.clone();

    state.apply(Command::OpenCreate {
        date: dates::march_5_2024(),
    });
    let outcome = state.apply(Command::Save {
        draft: EventDraft::new("", "10:00", "30m"),
        target: SaveTarget::New {
            date: dates::march_5_2024(),
        },
    });

    assert_eq!(outcome, CommandOutcome::Rejected);
    assert!(state.dialog.is_open());
    assert_eq!(state.store, before);
}

#[test]
fn test_seed_json_matches_fixture_store() {
    let parsed = parse_seed(BUSY_TUESDAY_JSON).expect("Failed to parse seed");
    let expected = stores::busy_tuesday();

    assert_eq!(parsed.len(), expected.len());
    for (a, b) in parsed.events().iter().zip(expected.events()) {
        assert!(a.same_content(b), "{:?} != {:?}", a, b);
    }
}

#[test]
fn test_navigation_changes_rendered_grid() {
    let mut state = CalendarState::new(stores::busy_tuesday(), dates::march_5_2024());

    state.apply(Command::Navigate { delta: -1 });
    let grid = grid_range_at(state.selected_month, dates::march_5_2024());

    assert!(grid.iter().any(|day| day.date == dates::leap_day_2024() && day.in_month));
    assert!(!grid.iter().any(|day| day.is_today && day.in_month));
}

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

    let defaults = service.load().expect("Failed to load defaults");
    assert_eq!(defaults, Settings::default());

    let mut settings = defaults;
    settings.theme = "dark".to_string();
    settings.max_visible_events = 4;
    settings.window_width = 1024.0;
    service.save(&settings).expect("Failed to save settings");

    let reloaded = service.load().expect("Failed to reload settings");
    assert_eq!(reloaded, settings);
}
