use super::*;
use crate::types::{EmployeeRole, FeedbackType};

fn valid_employee() -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        title: "Engineer".to_owned(),
        unit: "Platform".to_owned(),
        team: None,
        location: "Berlin".to_owned(),
        start_date: "2024-05-01".to_owned(),
        role: EmployeeRole::Employee,
        is_buddy_guide: false,
        is_newcomer: true,
        tech_stack: Vec::new(),
        interests: Vec::new(),
    }
}

// =============================================================
// Employees
// =============================================================

#[test]
fn complete_employee_passes() {
    assert_eq!(valid_employee().validate(), Ok(()));
}

#[test]
fn blank_employee_reports_every_required_field() {
    let err = CreateEmployeeRequest::default().validate().unwrap_err();
    let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        ["firstName", "lastName", "email", "title", "unit", "location", "startDate"]
    );
    assert_eq!(err.for_field("unit"), Some("Unit is required"));
}

#[test]
fn malformed_email_is_flagged() {
    for email in ["ada", "@example.com", "ada@", "a@b@c"] {
        let mut request = valid_employee();
        request.email = email.to_owned();
        let err = request.validate().unwrap_err();
        assert_eq!(err.for_field("email"), Some("Email must look like name@example.com"), "{email}");
    }
}

// =============================================================
// Buddy profiles
// =============================================================

#[test]
fn buddy_profile_requires_bio_and_sane_capacity() {
    let request = BuddyProfileRequest { max_active_buddies: 0, ..BuddyProfileRequest::default() };
    let err = request.validate().unwrap_err();
    assert_eq!(err.for_field("bio"), Some("Bio is required"));
    assert_eq!(
        err.for_field("maxActiveBuddies"),
        Some("Max active buddies must be between 1 and 10")
    );
    assert_eq!(
        err.to_string(),
        "Bio is required; Max active buddies must be between 1 and 10"
    );
}

#[test]
fn default_buddy_profile_with_bio_passes() {
    let request = BuddyProfileRequest { bio: "Ask me anything".to_owned(), ..BuddyProfileRequest::default() };
    assert!(request.validate().is_ok());
}

// =============================================================
// Matches, feedback, points, messages
// =============================================================

#[test]
fn match_cannot_pair_employee_with_self() {
    let same = CreateMatchRequest { buddy_id: 3, newcomer_id: 3, notes: None };
    assert!(same.validate().is_err());
    let distinct = CreateMatchRequest { buddy_id: 3, newcomer_id: 4, notes: None };
    assert!(distinct.validate().is_ok());
}

#[test]
fn feedback_rating_range_and_comment_length() {
    let mut request = FeedbackRequest {
        match_id: 1,
        submitted_by_id: 2,
        rating: 0,
        comment: Some("x".repeat(MAX_COMMENT_CHARS + 1)),
        feedback_type: FeedbackType::BuddyToNewcomer,
    };
    let err = request.validate().unwrap_err();
    assert!(err.for_field("rating").is_some());
    assert!(err.for_field("comment").is_some());

    request.rating = 5;
    request.comment = Some("x".repeat(MAX_COMMENT_CHARS));
    assert!(request.validate().is_ok());
}

#[test]
fn award_points_needs_points_and_reason() {
    let err = AwardPointsRequest { buddy_id: 1, points: 0, reason: " ".to_owned() }
        .validate()
        .unwrap_err();
    assert_eq!(err.errors.len(), 2);
}

#[test]
fn message_content_required() {
    let request = SendMessageRequest { match_id: 1, sender_id: 2, content: "\n".to_owned() };
    assert_eq!(request.validate().unwrap_err().for_field("content"), Some("Message is required"));
}

// =============================================================
// Tag helpers
// =============================================================

#[test]
fn split_tags_trims_and_dedupes() {
    assert_eq!(split_tags(" Rust, go;rust ,, TypeScript "), ["Rust", "go", "TypeScript"]);
    assert!(split_tags("  ").is_empty());
}

#[test]
fn join_tags_is_comma_separated() {
    assert_eq!(join_tags(&["Rust".to_owned(), "Go".to_owned()]), "Rust, Go");
}

#[test]
fn non_empty_trims() {
    assert_eq!(non_empty("  hi "), Some("hi".to_owned()));
    assert_eq!(non_empty("   "), None);
}
