//! # Commit Statistics Library
//!
//! `commitstats` turns a flat list of parsed commit records into the
//! time-bucketed, filterable summaries a git dashboard draws from: line
//! charts per developer, overview cards and contributor rankings.
//!
//! ## Features
//!
//! - Filter commits by author and date range
//! - Bucket commit activity by month or by day
//! - Averages and summaries over the bucketed series
//! - Whole-repository totals and per-developer commit counts
//! - Top contributors ranking
//! - Trailing-window (e.g. last 30 days) overview numbers
//! - Optional memoization of aggregation results
//!
//! Every query is a pure function of its inputs. The dashboard layer in
//! [`app`] owns the filter selection and hands it to the engine explicitly.
//!
//! ## Example
//!
//! ```no_run
//! use commitstats::analysis::{aggregate, average, build_stats};
//! use commitstats::types::{BucketField, CommitRecord, DateRange, Interval};
//! use commitstats::utils::epoch_millis;
//!
//! let records: Vec<CommitRecord> = serde_json::from_str("[]").unwrap();
//! let stats = build_stats(&records);
//! let range = DateRange::new(epoch_millis(2023, 1, 1), epoch_millis(2023, 12, 31));
//!
//! let buckets = aggregate(&records, Interval::Month, "Alice", range);
//! let mean = average(BucketField::NumCommits, &records, Interval::Month, "Alice", range);
//! println!(
//!     "{} buckets, {:.1} commits/month, {} commits total",
//!     buckets.len(),
//!     mean,
//!     stats.number_of_total_commits
//! );
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::Dashboard;
pub use config::EngineConfig;
pub use error::{Result, StatsError};
pub use types::{
    BucketField, CommitRecord, DateRange, DeveloperInfo, FilterState, GitLogStats, Interval,
    TimeBucket,
};
