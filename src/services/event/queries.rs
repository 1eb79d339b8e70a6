use super::EventStore;
use crate::models::event::{Event, EventId};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Events on `date`, ordered by time of day.
///
/// Times that read as `H:MM` or `HH:MM` are compared as clock times, so
/// "9:00" sorts before "10:00". Anything unparseable sorts after them by plain
/// string comparison. Equal times keep store order.
pub fn bucket(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let mut day: Vec<&Event> = events.iter().filter(|event| event.date == date).collect();
    day.sort_by(|a, b| compare_times(&a.time, &b.time));
    day
}

/// How many events a day cell hides behind "+N more"
pub fn overflow_count(bucket_len: usize, cap: usize) -> usize {
    bucket_len.saturating_sub(cap)
}

fn compare_times(a: &str, b: &str) -> Ordering {
    match (clock_minutes(a), clock_minutes(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn clock_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.trim().split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

impl EventStore {
    /// Events on `date` in display order
    pub fn bucket(&self, date: NaiveDate) -> Vec<&Event> {
        bucket(&self.events, date)
    }

    /// Resolve a bucket position (as rendered) to the event's id
    pub fn event_at(&self, date: NaiveDate, index: usize) -> Option<EventId> {
        self.bucket(date).get(index).map(|event| event.id)
    }
}
