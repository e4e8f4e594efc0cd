use chrono::Local;
use log::{debug, info};

use crate::analysis::{average_of, build_stats, AggregateOptions, AggregationCache};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::types::{
    BucketField, CommitRecord, DateRange, FilterState, GitLogStats, Interval, TimeBucket,
};
use crate::utils::calendar::start_of_day;

/// Dashboard state: the imported commits, their totals and the filter selection.
///
/// The statistics functions never see this struct; it hands its filter
/// values to them explicitly.
pub struct Dashboard {
    records: Vec<CommitRecord>,
    stats: GitLogStats,
    filter: FilterState,
    config: EngineConfig,
    cache: AggregationCache,
}

impl Dashboard {
    /// Create an empty dashboard with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            records: Vec::new(),
            stats: GitLogStats::default(),
            filter: FilterState::default(),
            cache: AggregationCache::new(config.cache_capacity),
            config,
        })
    }

    /// Replace the commit history and rebuild the totals
    pub fn import(&mut self, records: Vec<CommitRecord>) {
        let stats = build_stats(&records);
        self.import_with_stats(records, stats);
    }

    /// Replace the commit history with totals the importer already computed
    pub fn import_with_stats(&mut self, records: Vec<CommitRecord>, stats: GitLogStats) {
        info!(
            "Imported {} commits from {} developers",
            records.len(),
            stats.developer_infos.len()
        );
        self.records = records;
        self.stats = stats;
        self.cache.clear();
        self.reconcile_filter();
    }

    /// Keep the developer selection pointing at a known developer.
    fn reconcile_filter(&mut self) {
        if self.stats.contains_developer(&self.filter.developer) {
            return;
        }
        let first = self
            .stats
            .developer_names()
            .first()
            .map(|name| name.to_string())
            .unwrap_or_default();
        debug!(
            "Developer '{}' not in imported history, selecting '{}'",
            self.filter.developer, first
        );
        self.filter.developer = first;
    }

    pub fn set_interval(&mut self, interval: Interval) {
        self.filter.interval = interval;
    }

    pub fn set_developer(&mut self, developer: impl Into<String>) {
        self.filter.developer = developer.into();
    }

    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.filter.date_range = date_range;
    }

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn stats(&self) -> &GitLogStats {
        &self.stats
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Trailing windows end at today's local midnight, so the resolved range
    /// and with it the cache key stay fixed for the whole day.
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions::new(self.config.empty_range).with_now(start_of_day(Local::now()))
    }

    /// Buckets for the current filter selection
    pub fn buckets(&mut self) -> Vec<TimeBucket> {
        let options = self.aggregate_options();
        self.cache.get_or_aggregate(&self.records, &self.filter, &options)
    }

    /// Average of `field` per bucket for the current filter selection
    pub fn average(&mut self, field: BucketField) -> f64 {
        average_of(field, &self.buckets())
    }

    pub fn cache(&self) -> &AggregationCache {
        &self.cache
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            records: Vec::new(),
            stats: GitLogStats::default(),
            filter: FilterState::default(),
            cache: AggregationCache::new(config.cache_capacity),
            config,
        }
    }
}
