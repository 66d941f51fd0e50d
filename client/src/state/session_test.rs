use super::*;
use models::EmployeeRole;

fn employee(id: i64, role: EmployeeRole) -> Employee {
    Employee {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("e{id}@example.com"),
        title: "Engineer".to_owned(),
        unit: "Platform".to_owned(),
        team: None,
        location: "Berlin".to_owned(),
        start_date: None,
        role,
        tech_stack: Vec::new(),
        interests: Vec::new(),
        is_buddy_guide: false,
        is_newcomer: false,
    }
}

fn pending_match(buddy_id: i64, newcomer_id: i64) -> BuddyMatch {
    BuddyMatch {
        id: 1,
        buddy_id,
        newcomer_id,
        buddy: None,
        newcomer: None,
        status: MatchStatus::Pending,
        compatibility_score: 70.0,
        created_at: None,
        accepted_at: None,
        rejected_at: None,
        completed_at: None,
        expired_at: None,
        notes: None,
        rejection_reason: None,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn sign_in_and_out() {
    let mut session = SessionState::default();
    assert!(!session.is_signed_in());
    session.sign_in(employee(3, EmployeeRole::Hr));
    assert_eq!(session.user_id(), Some(3));
    assert!(session.is_hr());
    session.sign_out();
    assert_eq!(session, SessionState::default());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn hr_sees_every_link() {
    let hr = employee(1, EmployeeRole::Hr);
    assert_eq!(nav_items(Some(&hr)).len(), NAV_ITEMS.len());
}

#[test]
fn employees_do_not_see_hr_links() {
    let user = employee(2, EmployeeRole::Employee);
    let hrefs: Vec<_> = nav_items(Some(&user)).iter().map(|i| i.href).collect();
    assert!(!hrefs.contains(&"/matching"));
    assert!(!hrefs.contains(&"/analytics"));
    assert!(hrefs.contains(&"/matches"));
}

#[test]
fn signed_out_only_gets_switcher() {
    let items = nav_items(None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].href, "/login");
}

#[test]
fn active_link_matching() {
    assert!(is_active_link("/", "/"));
    assert!(!is_active_link("/", "/matches"));
    assert!(is_active_link("/matches", "/matches/12"));
    assert!(!is_active_link("/matches", "/matching"));
}

// =============================================================
// Capabilities
// =============================================================

#[test]
fn buddy_and_hr_can_respond_to_pending() {
    let m = pending_match(10, 20);
    assert!(can_respond(&employee(10, EmployeeRole::Employee), &m));
    assert!(can_respond(&employee(99, EmployeeRole::Hr), &m));
    assert!(!can_respond(&employee(20, EmployeeRole::Employee), &m));
}

#[test]
fn nobody_responds_once_active() {
    let mut m = pending_match(10, 20);
    m.status = MatchStatus::Active;
    assert!(!can_respond(&employee(10, EmployeeRole::Employee), &m));
    assert!(!can_respond(&employee(99, EmployeeRole::Hr), &m));
}

#[test]
fn profile_management_requires_buddy_guide() {
    let mut target = employee(5, EmployeeRole::Employee);
    let hr = employee(1, EmployeeRole::Hr);
    assert!(!can_manage_profile(&hr, &target));
    target.is_buddy_guide = true;
    assert!(can_manage_profile(&hr, &target));
    assert!(can_manage_profile(&target.clone(), &target));
    assert!(!can_manage_profile(&employee(6, EmployeeRole::Employee), &target));
}

#[test]
fn feedback_direction_follows_participant_role() {
    let m = pending_match(10, 20);
    assert_eq!(
        feedback_type_for(&employee(20, EmployeeRole::Employee), &m),
        Some(FeedbackType::NewcomerToBuddy)
    );
    assert_eq!(
        feedback_type_for(&employee(10, EmployeeRole::Employee), &m),
        Some(FeedbackType::BuddyToNewcomer)
    );
    assert_eq!(feedback_type_for(&employee(1, EmployeeRole::Hr), &m), None);
}

#[test]
fn feedback_only_for_active_or_completed() {
    let newcomer = employee(20, EmployeeRole::Employee);
    let mut m = pending_match(10, 20);
    assert!(!can_leave_feedback(&newcomer, &m));
    m.status = MatchStatus::Active;
    assert!(can_leave_feedback(&newcomer, &m));
    m.status = MatchStatus::Completed;
    assert!(can_leave_feedback(&newcomer, &m));
    m.status = MatchStatus::Rejected;
    assert!(!can_leave_feedback(&newcomer, &m));
}

#[test]
fn match_visibility() {
    let m = pending_match(10, 20);
    assert!(can_view_match(&employee(20, EmployeeRole::Employee), &m));
    assert!(can_view_match(&employee(1, EmployeeRole::Hr), &m));
    assert!(!can_view_match(&employee(30, EmployeeRole::Employee), &m));
}
