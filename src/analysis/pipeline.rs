use chrono::{DateTime, Local};
use log::debug;
use std::collections::BTreeMap;

use crate::config::EmptyRangePolicy;
use crate::types::{CommitRecord, DateRange, Interval, TimeBucket};
use crate::utils::calendar::{local_midnight_millis, months_before, record_date};

/// (year, month, day) with the day fixed to 1 for monthly buckets.
/// Ordering the key orders the buckets chronologically.
type BucketKey = (i32, u32, u32);

/// Options that change how a date range is interpreted
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    pub empty_range: EmptyRangePolicy,
    /// Reference time for trailing windows
    pub now: DateTime<Local>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self::new(EmptyRangePolicy::ExcludeAll)
    }
}

impl AggregateOptions {
    pub fn new(empty_range: EmptyRangePolicy) -> Self {
        Self {
            empty_range,
            now: Local::now(),
        }
    }

    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    /// The range actually applied once the empty-range policy is taken into account
    pub fn resolve(&self, date_range: DateRange) -> DateRange {
        match self.empty_range {
            EmptyRangePolicy::TrailingMonths(months) if date_range.is_unbounded() => DateRange::new(
                Some(months_before(self.now, months)),
                Some(self.now.timestamp_millis()),
            ),
            _ => date_range,
        }
    }
}

/// Aggregate one developer's commits into chronologically ordered time buckets.
///
/// Records are kept when `author_name` equals `developer` exactly and their
/// calendar day lies inside `date_range` (both bounds inclusive). A range
/// without any bound matches nothing, and neither does a range whose start
/// lies after its end.
pub fn aggregate(
    records: &[CommitRecord],
    interval: Interval,
    developer: &str,
    date_range: DateRange,
) -> Vec<TimeBucket> {
    aggregate_with(records, interval, developer, date_range, &AggregateOptions::default())
}

/// [`aggregate`] with an explicit empty-range policy.
pub fn aggregate_with(
    records: &[CommitRecord],
    interval: Interval,
    developer: &str,
    date_range: DateRange,
    options: &AggregateOptions,
) -> Vec<TimeBucket> {
    let range = options.resolve(date_range);
    if let (Some(start), Some(end)) = (range.start, range.end) {
        if start > end {
            debug!("Date range starts after it ends ({} > {}), nothing to aggregate", start, end);
            return Vec::new();
        }
    }

    let mut buckets: BTreeMap<BucketKey, TimeBucket> = BTreeMap::new();
    let mut matched = 0usize;

    let selected = records
        .iter()
        .filter(|record| record.author_name == developer)
        .filter(|record| {
            record_date(record)
                .map(|day| range.contains(local_midnight_millis(day)))
                .unwrap_or(false)
        });

    for record in selected {
        matched += 1;
        buckets
            .entry(bucket_key(record, interval))
            .and_modify(|bucket| absorb(bucket, record))
            .or_insert_with(|| open_bucket(record, interval));
    }

    debug!(
        "Aggregated {} of {} commits for '{}' into {} {} buckets",
        matched,
        records.len(),
        developer,
        buckets.len(),
        interval
    );

    buckets.into_values().collect()
}

fn bucket_key(record: &CommitRecord, interval: Interval) -> BucketKey {
    match interval {
        Interval::Month => (record.year, record.month, 1),
        Interval::Date => (record.year, record.month, record.date),
    }
}

fn open_bucket(record: &CommitRecord, interval: Interval) -> TimeBucket {
    let (year, month, date) = bucket_key(record, interval);
    let title = match interval {
        Interval::Month => format!("{}-{}", year, month),
        Interval::Date => format!("{}-{}-{}", year, month, date),
    };

    TimeBucket {
        year,
        month,
        date,
        title,
        num_added_lines: record.num_added_lines,
        num_deleted_lines: record.num_deleted_lines,
        num_commits: 1,
    }
}

fn absorb(bucket: &mut TimeBucket, record: &CommitRecord) {
    bucket.num_added_lines += record.num_added_lines;
    bucket.num_deleted_lines += record.num_deleted_lines;
    bucket.num_commits += 1;
}
