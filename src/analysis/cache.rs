use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;

use super::pipeline::{aggregate_with, AggregateOptions};
use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::types::{CacheKey, CommitRecord, FilterState, TimeBucket};

/// Memoizes aggregation results for one imported record set.
///
/// The cache does not know which records produced an entry, so it must be
/// cleared whenever the records change.
pub struct AggregationCache {
    cache: LruCache<CacheKey, Vec<TimeBucket>>,
    hits: u64,
    misses: u64,
}

impl AggregationCache {
    /// Create a cache holding up to `capacity` results (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Buckets for `filter`, aggregated on a miss
    pub fn get_or_aggregate(
        &mut self,
        records: &[CommitRecord],
        filter: &FilterState,
        options: &AggregateOptions,
    ) -> Vec<TimeBucket> {
        let key = CacheKey {
            interval: filter.interval,
            developer: filter.developer.clone(),
            date_range: options.resolve(filter.date_range),
        };

        if let Some(buckets) = self.cache.get(&key) {
            self.hits += 1;
            trace!("Aggregation cache hit for {:?}", key);
            return buckets.clone();
        }

        self.misses += 1;
        trace!("Aggregation cache miss for {:?}", key);
        // the key already holds the resolved range
        let buckets =
            aggregate_with(records, key.interval, &key.developer, key.date_range, options);
        self.cache.put(key, buckets.clone());
        buckets
    }

    /// Retrieve a result from the cache
    pub fn get(&mut self, key: &CacheKey) -> Option<&Vec<TimeBucket>> {
        self.cache.get(key)
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// (hits, misses) since the last clear
    pub fn hit_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for AggregationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
