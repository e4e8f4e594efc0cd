use log::debug;

use crate::types::{CommitRecord, DeveloperInfo, GitLogStats};

/// Build whole-repository totals and per-developer commit counts.
///
/// Name and email of a developer come from the first record seen for that
/// author; later records only bump the commit count.
pub fn build_stats(records: &[CommitRecord]) -> GitLogStats {
    let mut stats = GitLogStats {
        number_of_total_commits: records.len(),
        ..Default::default()
    };

    for record in records {
        stats.number_of_total_additions += record.num_added_lines;
        stats.number_of_total_deletions += record.num_deleted_lines;

        stats
            .developer_infos
            .entry(record.author_name.clone())
            .and_modify(|info| info.number_of_commits += 1)
            .or_insert_with(|| DeveloperInfo {
                name: record.author_name.clone(),
                email: record.author_email.clone(),
                number_of_commits: 1,
            });
    }

    debug!(
        "Built stats: {} commits, +{} -{}, {} developers",
        stats.number_of_total_commits,
        stats.number_of_total_additions,
        stats.number_of_total_deletions,
        stats.developer_infos.len()
    );

    stats
}
