// Property-based tests for month grid generation

use chrono::{Datelike, NaiveDate, Weekday};
use month_planner::utils::date::{days_in_month, grid_range_at};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn test_grid_is_whole_weeks(anchor in any_date()) {
        let grid = grid_range_at(anchor, anchor);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!((28..=42).contains(&grid.len()));
        prop_assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        prop_assert_eq!(grid[grid.len() - 1].date.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_grid_is_consecutive(anchor in any_date()) {
        let grid = grid_range_at(anchor, anchor);

        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_grid_contains_whole_month(anchor in any_date()) {
        let grid = grid_range_at(anchor, anchor);
        let in_month: Vec<_> = grid.iter().filter(|day| day.in_month).collect();

        prop_assert_eq!(in_month.len() as u32, days_in_month(anchor.year(), anchor.month()));
        prop_assert_eq!(in_month[0].date.day(), 1);
        prop_assert!(in_month.iter().all(|day| day.date.month() == anchor.month()));
    }

    #[test]
    fn test_today_flag_matches_single_cell(anchor in any_date()) {
        let grid = grid_range_at(anchor, anchor);

        let flagged: Vec<_> = grid.iter().filter(|day| day.is_today).collect();
        prop_assert_eq!(flagged.len(), 1);
        prop_assert_eq!(flagged[0].date, anchor);
    }
}
