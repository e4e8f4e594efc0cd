mod cache;
pub mod activity;
pub mod pipeline;
pub mod ranking;
pub mod recent;
pub mod statistics;
pub mod totals;


pub use activity::{monthly_developer_activity, ActivityBucket};
pub use cache::AggregationCache;
pub use pipeline::{aggregate, aggregate_with, AggregateOptions};
pub use ranking::{top_developers, DEFAULT_TOP_N};
pub use recent::{
    active_developers_in_window, additions_in_window, commits_in_window, deletions_in_window,
    RecentSummary,
};
pub use statistics::{average, average_of, average_with, summarize, FieldSummary};
pub use totals::build_stats;
