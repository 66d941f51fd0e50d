use super::*;
use models::EmployeeRole;

fn newcomer(id: i64) -> Employee {
    Employee {
        id,
        first_name: format!("New{id}"),
        last_name: "Comer".to_owned(),
        email: String::new(),
        title: String::new(),
        unit: String::new(),
        team: None,
        location: String::new(),
        start_date: None,
        role: EmployeeRole::Employee,
        tech_stack: Vec::new(),
        interests: Vec::new(),
        is_buddy_guide: false,
        is_newcomer: true,
    }
}

fn make_match(id: i64, buddy_id: i64, newcomer_id: i64, status: MatchStatus) -> BuddyMatch {
    BuddyMatch {
        id,
        buddy_id,
        newcomer_id,
        buddy: None,
        newcomer: None,
        status,
        compatibility_score: 50.0,
        created_at: None,
        accepted_at: None,
        rejected_at: None,
        completed_at: None,
        expired_at: None,
        notes: None,
        rejection_reason: None,
    }
}

#[test]
fn assigned_newcomers_leave_the_waiting_list() {
    let newcomers = vec![newcomer(1), newcomer(2), newcomer(3), newcomer(4)];
    let matches = vec![
        make_match(10, 50, 1, MatchStatus::Pending),
        make_match(11, 50, 2, MatchStatus::Active),
        make_match(12, 50, 3, MatchStatus::Rejected),
        make_match(13, 50, 4, MatchStatus::Completed),
    ];
    let free: Vec<_> = newcomers_awaiting_buddy(&newcomers, &matches)
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(free, [3]);
}

#[test]
fn no_matches_means_everyone_is_free() {
    let newcomers = vec![newcomer(1), newcomer(2)];
    assert_eq!(newcomers_awaiting_buddy(&newcomers, &[]).len(), 2);
}

#[test]
fn filter_by_status_none_keeps_all() {
    let matches = vec![
        make_match(1, 5, 6, MatchStatus::Pending),
        make_match(2, 5, 7, MatchStatus::Active),
    ];
    assert_eq!(filter_by_status(&matches, None).len(), 2);
    let pending = filter_by_status(&matches, Some(MatchStatus::Pending));
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 1);
    assert!(filter_by_status(&matches, Some(MatchStatus::Expired)).is_empty());
}

#[test]
fn merge_unique_dedupes_and_orders_newest_first() {
    let as_buddy = vec![make_match(1, 5, 6, MatchStatus::Active), make_match(3, 5, 8, MatchStatus::Pending)];
    let as_newcomer = vec![make_match(2, 9, 5, MatchStatus::Completed), make_match(3, 5, 8, MatchStatus::Pending)];
    let ids: Vec<_> = merge_unique([as_buddy, as_newcomer]).iter().map(|m| m.id).collect();
    assert_eq!(ids, [3, 2, 1]);
}

#[test]
fn status_counts_skip_empty() {
    let matches = vec![
        make_match(1, 5, 6, MatchStatus::Pending),
        make_match(2, 5, 7, MatchStatus::Pending),
        make_match(3, 5, 8, MatchStatus::Completed),
    ];
    assert_eq!(
        status_counts(&matches),
        [(MatchStatus::Pending, 2), (MatchStatus::Completed, 1)]
    );
}

#[test]
fn current_for_newcomer_prefers_open_match() {
    let matches = vec![
        make_match(1, 5, 6, MatchStatus::Active),
        make_match(2, 7, 6, MatchStatus::Rejected),
        make_match(3, 7, 9, MatchStatus::Pending),
    ];
    assert_eq!(current_for_newcomer(&matches, 6).map(|m| m.id), Some(1));
}

#[test]
fn current_for_newcomer_falls_back_to_latest_completed() {
    let matches = vec![
        make_match(1, 5, 6, MatchStatus::Completed),
        make_match(2, 8, 6, MatchStatus::Completed),
        make_match(4, 7, 6, MatchStatus::Rejected),
    ];
    assert_eq!(current_for_newcomer(&matches, 6).map(|m| m.id), Some(2));
    assert!(current_for_newcomer(&matches, 42).is_none());
}

#[test]
fn rejected_or_expired_only_means_awaiting_a_buddy() {
    let newcomers = vec![newcomer(6)];
    let matches = vec![
        make_match(3, 5, 6, MatchStatus::Expired),
        make_match(4, 7, 6, MatchStatus::Rejected),
    ];
    assert!(current_for_newcomer(&matches, 6).is_none());
    let waiting: Vec<_> = newcomers_awaiting_buddy(&newcomers, &matches)
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(waiting, [6]);
}
