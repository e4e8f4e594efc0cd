//! View models handed to the chart and card renderers.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::state::Dashboard;
use crate::analysis::{
    average_of, monthly_developer_activity, top_developers, ActivityBucket, RecentSummary,
};
use crate::types::{BucketField, DeveloperInfo, FilterState, TimeBucket};

/// Data behind the per-developer line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartView {
    pub filter: FilterState,
    pub buckets: Vec<TimeBucket>,
    pub average_commits: f64,
    pub average_additions: f64,
    pub average_deletions: f64,
}

impl LineChartView {
    pub fn build(dashboard: &mut Dashboard) -> Self {
        let buckets = dashboard.buckets();
        Self {
            filter: dashboard.filter().clone(),
            average_commits: average_of(BucketField::NumCommits, &buckets),
            average_additions: average_of(BucketField::NumAddedLines, &buckets),
            average_deletions: average_of(BucketField::NumDeletedLines, &buckets),
            buckets,
        }
    }
}

/// Data behind the overview page: totals, cards, ranking and activity bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub total_commits: usize,
    pub total_additions: usize,
    pub total_deletions: usize,
    pub top_developers: Vec<DeveloperInfo>,
    pub recent: RecentSummary,
    pub activity: Vec<ActivityBucket>,
}

impl OverviewView {
    pub fn build(dashboard: &Dashboard, now: DateTime<Local>) -> Self {
        let stats = dashboard.stats();
        let config = dashboard.config();

        Self {
            total_commits: stats.number_of_total_commits,
            total_additions: stats.number_of_total_additions,
            total_deletions: stats.number_of_total_deletions,
            top_developers: top_developers(&stats.developer_infos, config.top_n)
                .into_iter()
                .cloned()
                .collect(),
            recent: RecentSummary::compute(dashboard.records(), now, config.recent_window_days),
            activity: monthly_developer_activity(dashboard.records(), stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::scenario_records;
    use crate::config::EngineConfig;
    use crate::types::DateRange;
    use crate::utils::epoch_millis;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_chart_view() {
        let mut dashboard = Dashboard::default();
        dashboard.import(scenario_records());
        let january = DateRange::new(epoch_millis(2023, 1, 1), epoch_millis(2023, 1, 31));
        dashboard.set_date_range(january);

        let view = LineChartView::build(&mut dashboard);
        assert_eq!(view.filter.developer, "A");
        assert_eq!(view.buckets.len(), 1);
        assert_eq!(view.average_commits, 2.0);
        assert_eq!(view.average_additions, 15.0);
        assert_eq!(view.average_deletions, 3.0);
    }

    #[test]
    fn test_overview_view() {
        let mut dashboard = Dashboard::default();
        dashboard.import(scenario_records());
        let now = Local.with_ymd_and_hms(2023, 2, 10, 9, 0, 0).unwrap();

        let view = OverviewView::build(&dashboard, now);
        assert_eq!(view.total_commits, 3);
        assert_eq!(view.total_additions, 18);
        assert_eq!(view.total_deletions, 3);

        let top: Vec<&str> = view.top_developers.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(top, vec!["A", "B"]);

        // Jan 20 and Feb 1 fall within 30 days of Feb 10
        assert_eq!(view.recent.commits, 2);
        assert_eq!(view.recent.active_developers, 2);
        assert_eq!(view.recent.additions, 8);
        assert_eq!(view.activity.len(), 2);
    }

    #[test]
    fn test_views_serialize() {
        let mut dashboard = Dashboard::default();
        dashboard.import(scenario_records());
        let view = LineChartView::build(&mut dashboard);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["filter"]["interval"], "month");
        assert_eq!(json["buckets"], serde_json::json!([]));
    }

    #[test]
    fn test_overview_with_huge_recent_window() {
        let config = EngineConfig::from_json_str(r#"{"recent_window_days": 100000000}"#).unwrap();
        let mut dashboard = Dashboard::new(config).unwrap();
        dashboard.import(scenario_records());
        let now = Local.with_ymd_and_hms(2023, 2, 10, 9, 0, 0).unwrap();

        let view = OverviewView::build(&dashboard, now);
        assert_eq!(view.recent.days, 100_000_000);
        assert_eq!(view.recent.commits, 3);
        assert_eq!(view.recent.active_developers, 2);
        assert_eq!(view.recent.additions, 18);
        assert_eq!(view.recent.deletions, 3);
    }
}
