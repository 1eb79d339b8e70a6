// Property-based tests for bucketing and store transactions

use chrono::NaiveDate;
use month_planner::models::event::EventDraft;
use month_planner::services::event::{EventStore, MoveOutcome};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Zero-padded HH:MM so lexicographic and chronological order agree
fn padded_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

fn any_record() -> impl Strategy<Value = (EventDraft, NaiveDate)> {
    ("[A-Za-z]{1,12}", padded_time(), 0i64..14).prop_map(|(title, time, offset)| {
        (
            EventDraft::new(title, time, "30m"),
            base_date() + chrono::Duration::days(offset),
        )
    })
}

fn any_store() -> impl Strategy<Value = EventStore> {
    prop::collection::vec(any_record(), 0..40).prop_map(EventStore::from_records)
}

proptest! {
    #[test]
    fn test_bucket_is_sorted_subset(store in any_store(), offset in 0i64..14) {
        let date = base_date() + chrono::Duration::days(offset);
        let bucket = store.bucket(date);

        let expected = store.events().iter().filter(|e| e.date == date).count();
        prop_assert_eq!(bucket.len(), expected);
        prop_assert!(bucket.iter().all(|e| e.date == date));
        for pair in bucket.windows(2) {
            prop_assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn test_buckets_partition_store(store in any_store()) {
        let total: usize = (0..14)
            .map(|offset| store.bucket(base_date() + chrono::Duration::days(offset)).len())
            .sum();

        prop_assert_eq!(total, store.len());
    }

    #[test]
    fn test_move_preserves_other_records(
        store in any_store(),
        pick in any::<prop::sample::Index>(),
        offset in 0i64..14,
    ) {
        prop_assume!(!store.is_empty());
        let mut moved = store.clone();
        let target = &store.events()[pick.index(store.len())];
        let dest = base_date() + chrono::Duration::days(offset);

        let outcome = moved.move_event(target.id, dest).unwrap();

        prop_assert_eq!(moved.len(), store.len());
        prop_assert_eq!(moved.get(target.id).map(|e| e.date), Some(dest));
        let others_before: Vec<_> = store.events().iter().filter(|e| e.id != target.id).collect();
        let others_after: Vec<_> = moved.events().iter().filter(|e| e.id != target.id).collect();
        prop_assert_eq!(others_before, others_after);
        if target.date == dest {
            prop_assert_eq!(outcome, MoveOutcome::Unchanged);
            prop_assert_eq!(&moved, &store);
        }
    }

    #[test]
    fn test_resaving_unchanged_draft_is_idempotent(
        store in any_store(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!store.is_empty());
        let mut saved = store.clone();
        let target = store.events()[pick.index(store.len())].clone();

        let draft = EventDraft::from_event(&target);
        saved.save(&draft, target.date, Some(target.id)).unwrap();

        prop_assert_eq!(&saved, &store);
    }

    #[test]
    fn test_blank_title_never_mutates(store in any_store(), time in padded_time(), blank in "[ \t]{0,3}") {
        let mut attempted = store.clone();

        let result = attempted.save(&EventDraft::new(blank, time, "1h"), base_date(), None);

        prop_assert!(result.is_err());
        prop_assert_eq!(&attempted, &store);
    }
}
