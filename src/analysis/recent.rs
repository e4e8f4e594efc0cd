//! Trailing-window numbers for the overview cards.
//!
//! These work on the full record set and ignore the dashboard filters. Each
//! query derives its own cutoff from `now` and the window length.

use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use std::collections::HashSet;

use crate::types::CommitRecord;
use crate::utils::record_instant;

/// Earliest instant (epoch milliseconds) inside a window of `days` ending at `now`.
///
/// A window reaching past the range `chrono` can represent has no lower bound.
pub fn window_cutoff(now: DateTime<Local>, days: i64) -> i64 {
    Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .map_or(i64::MIN, |cutoff| cutoff.timestamp_millis())
}

fn in_window<'a>(
    records: &'a [CommitRecord],
    now: DateTime<Local>,
    days: i64,
) -> impl Iterator<Item = &'a CommitRecord> + 'a {
    let cutoff = window_cutoff(now, days);
    records
        .iter()
        .filter(move |record| record_instant(record).is_some_and(|instant| instant >= cutoff))
}

/// Number of commits in the window
pub fn commits_in_window(records: &[CommitRecord], now: DateTime<Local>, days: i64) -> usize {
    in_window(records, now, days).count()
}

/// Number of distinct authors with at least one commit in the window
pub fn active_developers_in_window(
    records: &[CommitRecord],
    now: DateTime<Local>,
    days: i64,
) -> usize {
    in_window(records, now, days)
        .map(|record| record.author_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Lines added in the window
pub fn additions_in_window(records: &[CommitRecord], now: DateTime<Local>, days: i64) -> usize {
    in_window(records, now, days).map(|record| record.num_added_lines).sum()
}

/// Lines deleted in the window
pub fn deletions_in_window(records: &[CommitRecord], now: DateTime<Local>, days: i64) -> usize {
    in_window(records, now, days).map(|record| record.num_deleted_lines).sum()
}

/// All overview window numbers at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecentSummary {
    pub days: i64,
    pub commits: usize,
    pub active_developers: usize,
    pub additions: usize,
    pub deletions: usize,
}

impl RecentSummary {
    pub fn compute(records: &[CommitRecord], now: DateTime<Local>, days: i64) -> Self {
        Self {
            days,
            commits: commits_in_window(records, now, days),
            active_developers: active_developers_in_window(records, now, days),
            additions: additions_in_window(records, now, days),
            deletions: deletions_in_window(records, now, days),
        }
    }
}
