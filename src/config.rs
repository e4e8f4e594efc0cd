//! Engine configuration.
//!
//! ```
//! use commitstats::config::{EmptyRangePolicy, EngineConfig};
//!
//! let config = EngineConfig::from_json_str(r#"{"recent_window_days": 7}"#).unwrap();
//! assert_eq!(config.recent_window_days, 7);
//! assert_eq!(config.empty_range, EmptyRangePolicy::ExcludeAll);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_TOP_N;
use crate::error::{Result, StatsError};

pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// What the aggregation pipeline does when a date range has neither bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRangePolicy {
    /// Match no records
    #[default]
    ExcludeAll,
    /// Use the trailing window of the given number of months, ending now
    TrailingMonths(u32),
}

/// Tunables for the statistics engine and the dashboard built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of the overview's trailing window in days
    pub recent_window_days: i64,
    /// Number of developers in the top contributors list
    pub top_n: usize,
    /// Number of aggregation results kept by the dashboard cache
    pub cache_capacity: usize,
    pub empty_range: EmptyRangePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
            top_n: DEFAULT_TOP_N,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            empty_range: EmptyRangePolicy::ExcludeAll,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.recent_window_days <= 0 {
            return Err(StatsError::InvalidConfig(format!(
                "recent_window_days must be positive, got {}",
                self.recent_window_days
            )));
        }
        if self.cache_capacity == 0 {
            return Err(StatsError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if let EmptyRangePolicy::TrailingMonths(0) = self.empty_range {
            return Err(StatsError::InvalidConfig(
                "trailing_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
