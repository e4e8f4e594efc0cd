use serde::Serialize;
use statrs::statistics::Statistics;

use super::pipeline::{aggregate_with, AggregateOptions};
use crate::types::{BucketField, CommitRecord, DateRange, Interval, TimeBucket};

/// Summary of one field across a bucket series, used for chart reference lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FieldSummary {
    pub total: usize,
    pub mean: f64,
    /// Largest single-bucket value
    pub peak: usize,
    /// Population standard deviation
    pub std_dev: f64,
}

/// Average of `field` per bucket for the given filter.
///
/// Returns 0.0 when no bucket matches.
pub fn average(
    field: BucketField,
    records: &[CommitRecord],
    interval: Interval,
    developer: &str,
    date_range: DateRange,
) -> f64 {
    average_with(
        field,
        records,
        interval,
        developer,
        date_range,
        &AggregateOptions::default(),
    )
}

/// [`average`] with an explicit empty-range policy.
pub fn average_with(
    field: BucketField,
    records: &[CommitRecord],
    interval: Interval,
    developer: &str,
    date_range: DateRange,
    options: &AggregateOptions,
) -> f64 {
    let buckets = aggregate_with(records, interval, developer, date_range, options);
    average_of(field, &buckets)
}

/// Average of `field` over already aggregated buckets, 0.0 for an empty list.
pub fn average_of(field: BucketField, buckets: &[TimeBucket]) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }
    let sum: usize = buckets.iter().map(|b| field.value_of(b)).sum();
    sum as f64 / buckets.len() as f64
}

/// Total, mean, peak and spread of `field` over a bucket series.
pub fn summarize(field: BucketField, buckets: &[TimeBucket]) -> FieldSummary {
    if buckets.is_empty() {
        return FieldSummary::default();
    }

    let values: Vec<usize> = buckets.iter().map(|b| field.value_of(b)).collect();
    let samples: Vec<f64> = values.iter().map(|&v| v as f64).collect();

    FieldSummary {
        total: values.iter().sum(),
        mean: samples.iter().mean(),
        peak: Iterator::max(values.iter().copied()).unwrap_or(0),
        std_dev: samples.iter().population_std_dev(),
    }
}
