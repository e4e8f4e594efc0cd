use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{CommitRecord, GitLogStats};
use crate::utils::record_date;

/// Commit counts of every developer for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityBucket {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// One entry per known developer, in `developer_infos` order
    pub commits: IndexMap<String, usize>,
}

/// Month-by-month commit counts per developer over the whole history.
///
/// Every bucket lists all developers of `stats`, with zero for those who did
/// not commit that month. Commits from authors unknown to `stats` are ignored,
/// as are commits without a valid calendar date.
pub fn monthly_developer_activity(
    records: &[CommitRecord],
    stats: &GitLogStats,
) -> Vec<ActivityBucket> {
    let mut months: BTreeMap<(i32, u32), ActivityBucket> = BTreeMap::new();

    for record in records {
        let Some(day) = record_date(record) else {
            continue;
        };
        let (year, month) = (day.year(), day.month());
        let bucket = months
            .entry((year, month))
            .or_insert_with(|| ActivityBucket {
                year,
                month,
                title: format!("{}-{}", year, month),
                commits: stats
                    .developer_infos
                    .keys()
                    .map(|name| (name.clone(), 0))
                    .collect(),
            });

        if let Some(count) = bucket.commits.get_mut(&record.author_name) {
            *count += 1;
        }
    }

    months.into_values().collect()
}
