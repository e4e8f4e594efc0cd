//! Error types for the parse and configuration boundary.
//!
//! The statistics queries themselves never fail; errors only come from
//! turning strings into engine values or from loading configuration.

use thiserror::Error;

/// Errors raised while parsing filter values or configuration.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The interval string is neither `"month"` nor `"date"`
    #[error("unknown interval '{0}', expected 'month' or 'date'")]
    UnknownInterval(String),

    /// The bucket field name is not one of the aggregated metrics
    #[error(
        "unknown bucket field '{0}', expected num_commits, num_added_lines or num_deleted_lines"
    )]
    UnknownField(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
