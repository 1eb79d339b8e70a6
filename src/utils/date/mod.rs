// Date utility functions
// ISO formatting, month arithmetic and the month grid range

use chrono::{Datelike, Duration, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Falls inside the anchor's month (false for leading/trailing fill days)
    pub in_month: bool,
    pub is_today: bool,
}

pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parse a strict "YYYY-MM-DD" string
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

/// "March 2024"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Move by whole months, clamping the day to the length of the target month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month0() as i32 + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Saturday on or after `date`
pub fn week_end(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - date.weekday().num_days_from_sunday() as i64)
}

/// Every day shown for the month containing `anchor`, tagged against the
/// real current date.
pub fn grid_range(anchor: NaiveDate) -> Vec<GridDay> {
    grid_range_at(anchor, Local::now().date_naive())
}

/// Whole weeks from the Sunday on/before the 1st through the Saturday
/// on/after the last day of `anchor`'s month.
pub fn grid_range_at(anchor: NaiveDate, today: NaiveDate) -> Vec<GridDay> {
    let start = week_start(first_of_month(anchor));
    let end = week_end(last_of_month(anchor));

    let mut days = Vec::with_capacity(42);
    let mut day = start;
    while day <= end {
        days.push(GridDay {
            date: day,
            in_month: day.year() == anchor.year() && day.month() == anchor.month(),
            is_today: day == today,
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}
