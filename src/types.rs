//! # Common Types
//!
//! This module contains the types shared by the analysis functions and the
//! dashboard layer: the commit records handed over by the log importer, the
//! repository totals built from them, and the filter values and time buckets
//! the aggregation pipeline works with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatsError;

/// One parsed commit.
///
/// Records are produced by the log importer and never modified afterwards.
/// `month` is human-numbered (1-12) and `date` is the day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author_name: String,
    pub author_email: String,
    pub num_added_lines: usize,
    pub num_deleted_lines: usize,
    /// Raw timestamp text as printed by `git log`
    pub time_stamp: String,
    pub message: String,
    pub hash: String,
    pub weekday: String,
    pub year: i32,
    pub month: u32,
    pub date: u32,
}

/// Per-author summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperInfo {
    pub name: String,
    pub email: String,
    pub number_of_commits: usize,
}

/// Whole-repository totals and per-developer commit counts.
///
/// `developer_infos` keeps the order in which authors were first seen, which
/// the contributor ranking relies on to break ties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GitLogStats {
    #[serde(alias = "number_of_tatal_commits")]
    pub number_of_total_commits: usize,
    #[serde(alias = "number_of_tatal_additions")]
    pub number_of_total_additions: usize,
    #[serde(alias = "number_of_tatal_deletions")]
    pub number_of_total_deletions: usize,
    pub developer_infos: IndexMap<String, DeveloperInfo>,
}

impl GitLogStats {
    /// Author keys in first-seen order
    pub fn developer_names(&self) -> Vec<&str> {
        self.developer_infos.keys().map(String::as_str).collect()
    }

    pub fn contains_developer(&self, name: &str) -> bool {
        self.developer_infos.contains_key(name)
    }
}

/// Bucketing granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// One bucket per calendar month
    #[default]
    Month,
    /// One bucket per calendar day
    Date,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Date => "date",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Interval::Month),
            "date" => Ok(Interval::Date),
            other => Err(StatsError::UnknownInterval(other.to_string())),
        }
    }
}

/// Numeric field of a [`TimeBucket`] that can be summed or averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketField {
    NumCommits,
    NumAddedLines,
    NumDeletedLines,
}

impl BucketField {
    pub const ALL: [BucketField; 3] = [
        BucketField::NumCommits,
        BucketField::NumAddedLines,
        BucketField::NumDeletedLines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BucketField::NumCommits => "num_commits",
            BucketField::NumAddedLines => "num_added_lines",
            BucketField::NumDeletedLines => "num_deleted_lines",
        }
    }

    /// Read this field from a bucket
    pub fn value_of(&self, bucket: &TimeBucket) -> usize {
        match self {
            BucketField::NumCommits => bucket.num_commits,
            BucketField::NumAddedLines => bucket.num_added_lines,
            BucketField::NumDeletedLines => bucket.num_deleted_lines,
        }
    }
}

impl fmt::Display for BucketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketField {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BucketField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| StatsError::UnknownField(s.to_string()))
    }
}

/// Inclusive date range in epoch milliseconds; either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl DateRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Range with neither bound set
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `instant` falls inside the range.
    ///
    /// A range without bounds contains nothing.
    pub fn contains(&self, instant: i64) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= instant && instant <= end,
            (Some(start), None) => start <= instant,
            (None, Some(end)) => instant <= end,
            (None, None) => false,
        }
    }
}

/// The dashboard's current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub interval: Interval,
    pub developer: String,
    pub date_range: DateRange,
}

/// A key used for caching aggregation results.
///
/// The date range is the one actually applied, after any empty-range policy
/// has been resolved.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub interval: Interval,
    /// The author the buckets were filtered on
    pub developer: String,
    pub date_range: DateRange,
}

/// Aggregated metrics for one calendar month or day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub year: i32,
    pub month: u32,
    /// Day of month, fixed to 1 for monthly buckets
    pub date: u32,
    pub title: String,
    pub num_added_lines: usize,
    pub num_deleted_lines: usize,
    pub num_commits: usize,
}
