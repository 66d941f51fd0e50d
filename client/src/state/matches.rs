//! Match list derivations shared by the dashboard and the matches page.

#[cfg(test)]
#[path = "matches_test.rs"]
mod matches_test;

use std::collections::HashSet;

use models::{BuddyMatch, Employee, MatchStatus};

/// Whether `m` gives its newcomer a buddy. Rejected and expired matches
/// leave the newcomer waiting for another one.
pub fn assigns_buddy(m: &BuddyMatch) -> bool {
    matches!(m.status, MatchStatus::Pending | MatchStatus::Active | MatchStatus::Completed)
}

/// Newcomers with no match that assigns them a buddy.
pub fn newcomers_awaiting_buddy(newcomers: &[Employee], matches: &[BuddyMatch]) -> Vec<Employee> {
    let taken: HashSet<i64> = matches
        .iter()
        .filter(|m| assigns_buddy(m))
        .map(|m| m.newcomer_id)
        .collect();
    newcomers
        .iter()
        .filter(|n| !taken.contains(&n.id))
        .cloned()
        .collect()
}

/// Matches with `status`, or all of them for `None`.
pub fn filter_by_status(matches: &[BuddyMatch], status: Option<MatchStatus>) -> Vec<BuddyMatch> {
    matches
        .iter()
        .filter(|m| status.is_none_or(|s| m.status == s))
        .cloned()
        .collect()
}

/// Merge buddy-side and newcomer-side lists for one employee, dropping
/// duplicates by id and keeping newest (highest id) first.
pub fn merge_unique(lists: impl IntoIterator<Item = Vec<BuddyMatch>>) -> Vec<BuddyMatch> {
    let mut seen = HashSet::new();
    let mut out: Vec<BuddyMatch> = lists
        .into_iter()
        .flatten()
        .filter(|m| seen.insert(m.id))
        .collect();
    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}

/// Per-status counts in lifecycle order, omitting empty statuses.
pub fn status_counts(matches: &[BuddyMatch]) -> Vec<(MatchStatus, usize)> {
    MatchStatus::ALL
        .into_iter()
        .map(|s| (s, matches.iter().filter(|m| m.status == s).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// The newcomer's current match: the latest open one, else the latest
/// completed one. `None` while the newcomer is still awaiting a buddy.
pub fn current_for_newcomer(matches: &[BuddyMatch], newcomer_id: i64) -> Option<&BuddyMatch> {
    let mine = || matches.iter().filter(move |m| m.newcomer_id == newcomer_id);
    mine()
        .filter(|m| m.is_open())
        .max_by_key(|m| m.id)
        .or_else(|| mine().filter(|m| m.status == MatchStatus::Completed).max_by_key(|m| m.id))
}
