use indexmap::IndexMap;

use crate::types::DeveloperInfo;

/// Size of the top contributors list on the overview
pub const DEFAULT_TOP_N: usize = 5;

/// The `n` developers with the most commits, most active first.
///
/// Developers with equal counts keep the order of `developer_infos`.
pub fn top_developers(
    developer_infos: &IndexMap<String, DeveloperInfo>,
    n: usize,
) -> Vec<&DeveloperInfo> {
    let mut ranked: Vec<&DeveloperInfo> = developer_infos.values().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.number_of_commits.cmp(&a.number_of_commits));
    ranked.truncate(n);
    ranked
}
