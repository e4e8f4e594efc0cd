use commitstats::analysis::{aggregate, average, build_stats, top_developers};
use commitstats::types::{BucketField, CommitRecord, DateRange, Interval, TimeBucket};
use commitstats::utils::epoch_millis;
use proptest::prelude::*;
use std::collections::BTreeMap;

const AUTHORS: [&str; 3] = ["Ann", "Ben", "Cy"];

fn record_strategy() -> impl Strategy<Value = CommitRecord> {
    (0..AUTHORS.len(), 0usize..500, 0usize..500, 2019i32..2025, 1u32..=12, 1u32..=28).prop_map(
        |(author, added, deleted, year, month, date)| CommitRecord {
            author_name: AUTHORS[author].to_string(),
            author_email: format!("{}@example.com", AUTHORS[author].to_lowercase()),
            num_added_lines: added,
            num_deleted_lines: deleted,
            year,
            month,
            date,
            ..Default::default()
        },
    )
}

fn interval_strategy() -> impl Strategy<Value = Interval> {
    prop_oneof![Just(Interval::Month), Just(Interval::Date)]
}

/// A calendar day inside the generated record years
fn day_strategy() -> impl Strategy<Value = (i32, u32, u32)> {
    (2019i32..2025, 1u32..=12, 1u32..=28)
}

fn bucket_key(bucket: &TimeBucket) -> (i32, u32, u32) {
    (bucket.year, bucket.month, bucket.date)
}

proptest! {
    /// Buckets come out strictly ascending, so keys are unique
    #[test]
    fn prop_buckets_strictly_ascending(
        records in prop::collection::vec(record_strategy(), 0..200),
        interval in interval_strategy(),
        author in 0..AUTHORS.len(),
    ) {
        let range = DateRange::new(epoch_millis(2019, 1, 1), None);
        let buckets = aggregate(&records, interval, AUTHORS[author], range);

        for pair in buckets.windows(2) {
            prop_assert!(bucket_key(&pair[0]) < bucket_key(&pair[1]));
        }
        if interval == Interval::Month {
            prop_assert!(buckets.iter().all(|b| b.date == 1));
        }
    }

    /// Splitting a range in two and merging the results by key gives the same buckets
    #[test]
    fn prop_disjoint_ranges_merge(
        records in prop::collection::vec(record_strategy(), 0..200),
        interval in interval_strategy(),
        author in 0..AUTHORS.len(),
        split in day_strategy(),
    ) {
        let developer = AUTHORS[author];
        let split_at = epoch_millis(split.0, split.1, split.2).unwrap();
        let start = epoch_millis(2019, 1, 1);
        let end = epoch_millis(2024, 12, 31);

        let left_range = DateRange::new(start, Some(split_at - 1));
        let right_range = DateRange::new(Some(split_at), end);
        let left = aggregate(&records, interval, developer, left_range);
        let right = aggregate(&records, interval, developer, right_range);
        let whole = aggregate(&records, interval, developer, DateRange::new(start, end));

        let mut merged: BTreeMap<(i32, u32, u32), TimeBucket> = BTreeMap::new();
        for bucket in left.into_iter().chain(right) {
            merged
                .entry(bucket_key(&bucket))
                .and_modify(|b| {
                    b.num_commits += bucket.num_commits;
                    b.num_added_lines += bucket.num_added_lines;
                    b.num_deleted_lines += bucket.num_deleted_lines;
                })
                .or_insert(bucket);
        }
        let merged: Vec<TimeBucket> = merged.into_values().collect();

        prop_assert_eq!(merged, whole);
    }

    /// Identical inputs always give identical output
    #[test]
    fn prop_aggregation_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..100),
        interval in interval_strategy(),
        from in day_strategy(),
    ) {
        let range = DateRange::new(epoch_millis(from.0, from.1, from.2), None);
        prop_assert_eq!(
            aggregate(&records, interval, "Ann", range),
            aggregate(&records, interval, "Ann", range)
        );
    }

    /// Without any date bound nothing is aggregated and every average is exactly zero
    #[test]
    fn prop_unbounded_range_averages_zero(
        records in prop::collection::vec(record_strategy(), 0..100),
        interval in interval_strategy(),
    ) {
        for field in BucketField::ALL {
            prop_assert_eq!(average(field, &records, interval, "Ann", DateRange::unbounded()), 0.0);
        }
    }

    /// Ranking never exceeds n and never increases
    #[test]
    fn prop_top_developers_bounded_and_ordered(
        records in prop::collection::vec(record_strategy(), 0..200),
        n in 0usize..8,
    ) {
        let stats = build_stats(&records);
        let top = top_developers(&stats.developer_infos, n);

        prop_assert!(top.len() <= n);
        prop_assert_eq!(top.len(), n.min(stats.developer_infos.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].number_of_commits >= pair[1].number_of_commits);
        }
    }

    /// Per-developer counts always match a recount of the raw records
    #[test]
    fn prop_developer_counts_match_records(
        records in prop::collection::vec(record_strategy(), 0..200),
    ) {
        let stats = build_stats(&records);
        prop_assert_eq!(stats.number_of_total_commits, records.len());

        for (name, info) in &stats.developer_infos {
            let count = records.iter().filter(|r| &r.author_name == name).count();
            prop_assert_eq!(info.number_of_commits, count);
        }
    }
}
