//! Orders one film's showings and partitions them into per-date groups.

use crate::domain::{DateGroup, Showing};

/// Sort by `start_at` (ISO-8601 text compares chronologically within one offset
/// convention), then split into runs of equal calendar date.
pub fn group_by_date(showtimes: &[Showing]) -> Vec<DateGroup> {
    let mut sorted = showtimes.to_vec();
    sorted.sort_by(|a, b| a.start_at.cmp(&b.start_at));

    let mut groups: Vec<DateGroup> = Vec::new();
    for showing in sorted {
        match groups.last_mut() {
            Some(group) if group.date == showing.date() => group.showings.push(showing),
            _ => groups.push(DateGroup {
                date: showing.date().to_string(),
                showings: vec![showing],
            }),
        }
    }
    groups
}
