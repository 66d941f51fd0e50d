use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn employee_json() -> serde_json::Value {
    json!({
        "id": 7,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "title": "Senior Engineer",
        "unit": "Platform",
        "team": "Runtime",
        "location": "Berlin",
        "startDate": "2021-04-01T00:00:00",
        "role": "Employee",
        "techStack": ["Rust", "Go"],
        "interests": ["Climbing"],
        "isBuddyGuide": true,
        "isNewcomer": false
    })
}

fn make_employee() -> Employee {
    serde_json::from_value(employee_json()).unwrap()
}

fn make_profile() -> BuddyProfile {
    BuddyProfile {
        id: 3,
        employee_id: 7,
        employee: Some(make_employee()),
        bio: "Happy to help".to_owned(),
        specialties: vec!["Onboarding".to_owned()],
        location_override: None,
        unit_override: None,
        tech_stack_override: None,
        interests_override: None,
        availability: Availability::Available,
        max_active_buddies: 3,
        current_active_buddies: 1,
        can_accept_new_buddy: true,
        availability_score: 0.66,
    }
}

// =============================================================
// Employee
// =============================================================

#[test]
fn employee_decodes_camel_case_fields() {
    let employee = make_employee();
    assert_eq!(employee.id, 7);
    assert_eq!(employee.full_name(), "Ada Lovelace");
    assert_eq!(employee.team.as_deref(), Some("Runtime"));
    assert_eq!(employee.tech_stack, vec!["Rust", "Go"]);
    assert!(employee.is_buddy_guide);
    assert!(!employee.is_newcomer);
    assert!(!employee.is_hr());
}

#[test]
fn employee_role_uses_uppercase_hr() {
    assert_eq!(serde_json::to_string(&EmployeeRole::Hr).unwrap(), "\"HR\"");
    assert_eq!(serde_json::from_str::<EmployeeRole>("\"HR\"").unwrap(), EmployeeRole::Hr);
    assert_eq!(serde_json::from_str::<EmployeeRole>("\"Hr\"").unwrap(), EmployeeRole::Hr);
    assert_eq!(
        serde_json::from_str::<EmployeeRole>("\"Employee\"").unwrap(),
        EmployeeRole::Employee
    );
}

#[test]
fn employee_tolerates_nulls_and_missing_optionals() {
    let employee: Employee = serde_json::from_value(json!({
        "id": 1,
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": null,
        "techStack": null
    }))
    .unwrap();
    assert_eq!(employee.email, "");
    assert!(employee.tech_stack.is_empty());
    assert!(employee.interests.is_empty());
    assert_eq!(employee.role, EmployeeRole::Employee);
    assert_eq!(employee.start_date_display(), None);
}

#[test]
fn employee_initials_and_start_date() {
    let employee = make_employee();
    assert_eq!(employee.initials(), "AL");
    assert_eq!(employee.start_date_display(), Some("2021-04-01"));
}

#[test]
fn date_part_leaves_plain_dates_alone() {
    assert_eq!(date_part("2024-01-15"), "2024-01-15");
    assert_eq!(date_part("2024-01-15T08:30:00Z"), "2024-01-15");
}

// =============================================================
// BuddyProfile
// =============================================================

#[test]
fn buddy_profile_falls_back_to_employee_attributes() {
    let profile = make_profile();
    assert_eq!(profile.display_name(), "Ada Lovelace");
    assert_eq!(profile.effective_location(), Some("Berlin"));
    assert_eq!(profile.effective_unit(), Some("Platform"));
    assert_eq!(profile.effective_tech_stack(), ["Rust".to_owned(), "Go".to_owned()]);
    assert_eq!(profile.free_capacity(), 2);
}

#[test]
fn buddy_profile_overrides_win_when_present() {
    let mut profile = make_profile();
    profile.location_override = Some("Lisbon".to_owned());
    profile.unit_override = Some("  ".to_owned());
    profile.tech_stack_override = Some(vec!["Elixir".to_owned()]);
    profile.interests_override = Some(Vec::new());
    assert_eq!(profile.effective_location(), Some("Lisbon"));
    assert_eq!(profile.effective_unit(), Some("Platform"));
    assert_eq!(profile.effective_tech_stack(), ["Elixir".to_owned()]);
    assert_eq!(profile.effective_interests(), ["Climbing".to_owned()]);
}

#[test]
fn buddy_profile_without_employee_uses_placeholder() {
    let profile: BuddyProfile = serde_json::from_value(json!({
        "id": 9,
        "employeeId": 42,
        "availability": "Limited",
        "maxActiveBuddies": 2,
        "currentActiveBuddies": 5
    }))
    .unwrap();
    assert_eq!(profile.display_name(), "Buddy #42");
    assert_eq!(profile.availability, Availability::Limited);
    assert_eq!(profile.effective_location(), None);
    assert!(profile.effective_tech_stack().is_empty());
    assert_eq!(profile.free_capacity(), 0);
}

#[test]
fn availability_parses_case_insensitively() {
    assert_eq!("limited".parse::<Availability>().unwrap(), Availability::Limited);
    assert!("busy".parse::<Availability>().is_err());
}

// =============================================================
// BuddyMatch
// =============================================================

#[test]
fn buddy_match_decodes_status_and_timeline() {
    let m: BuddyMatch = serde_json::from_value(json!({
        "id": 11,
        "buddyId": 7,
        "newcomerId": 8,
        "status": "Active",
        "compatibilityScore": 82.5,
        "createdAt": "2024-02-01T10:00:00",
        "acceptedAt": "2024-02-02T09:00:00",
        "notes": null
    }))
    .unwrap();
    assert_eq!(m.status, MatchStatus::Active);
    assert!(m.is_open());
    assert!(m.involves(7));
    assert!(m.involves(8));
    assert!(!m.involves(9));
    assert_eq!(m.buddy_name(), "Employee #7");
    assert_eq!(
        m.timeline(),
        vec![("Created", "2024-02-01T10:00:00"), ("Accepted", "2024-02-02T09:00:00")]
    );
}

#[test]
fn match_status_rejects_unknown_values() {
    assert!(serde_json::from_str::<MatchStatus>("\"Cancelled\"").is_err());
    assert_eq!("expired".parse::<MatchStatus>().unwrap(), MatchStatus::Expired);
}

// =============================================================
// Recommendations and compatibility
// =============================================================

#[test]
fn recommendation_prefers_embedded_employee_name() {
    let rec: BuddyMatchRecommendation = serde_json::from_value(json!({
        "buddyId": 7,
        "buddy": employee_json(),
        "compatibilityScore": 91.0,
        "matchingTechStack": ["Rust"],
        "matchingInterests": null,
        "sameLocation": true
    }))
    .unwrap();
    assert_eq!(rec.display_name(), "Ada Lovelace");
    assert_eq!(rec.matching_tech_stack, vec!["Rust"]);
    assert!(rec.matching_interests.is_empty());
    assert!(rec.same_location);
    assert!(!rec.same_unit);
}

#[test]
fn compatibility_score_accepts_bare_number() {
    let score: CompatibilityScore = serde_json::from_str("73.5").unwrap();
    assert!((score.compatibility_score - 73.5).abs() < f64::EPSILON);
}

#[test]
fn compatibility_score_accepts_object_forms() {
    let wrapped: CompatibilityScore =
        serde_json::from_value(json!({ "compatibilityScore": 64, "buddyId": 1 })).unwrap();
    assert!((wrapped.compatibility_score - 64.0).abs() < f64::EPSILON);

    let short: CompatibilityScore = serde_json::from_value(json!({ "score": 12.0 })).unwrap();
    assert!((short.compatibility_score - 12.0).abs() < f64::EPSILON);

    assert!(serde_json::from_value::<CompatibilityScore>(json!({ "value": 1 })).is_err());
}

// =============================================================
// Gamification, feedback, analytics
// =============================================================

#[test]
fn leaderboard_kind_path_and_parse() {
    assert_eq!(LeaderboardKind::Points.as_path(), "points");
    assert_eq!(LeaderboardKind::Streak.to_string(), "streak");
    assert_eq!("MATCHES".parse::<LeaderboardKind>().unwrap(), LeaderboardKind::Matches);
    assert!("rating".parse::<LeaderboardKind>().is_err());
}

#[test]
fn leaderboard_entry_metric_follows_kind() {
    let entry: LeaderboardEntry = serde_json::from_value(json!({
        "rank": 1,
        "buddyId": 7,
        "buddyName": "Ada Lovelace",
        "totalPoints": 1200,
        "level": "Silver",
        "currentStreak": 4,
        "completedMatches": 6
    }))
    .unwrap();
    assert_eq!(entry.metric(LeaderboardKind::Points), 1200);
    assert_eq!(entry.metric(LeaderboardKind::Streak), 4);
    assert_eq!(entry.metric(LeaderboardKind::Matches), 6);
    assert_eq!(entry.level, BuddyLevel::Silver);
}

#[test]
fn game_profile_decodes_badges_and_achievements() {
    let profile: BuddyGameProfile = serde_json::from_value(json!({
        "buddyId": 7,
        "totalPoints": 1600,
        "level": "Gold",
        "currentStreak": 2,
        "longestStreak": 5,
        "badges": [{ "id": 1, "name": "First Match", "icon": "🤝" }],
        "achievements": null
    }))
    .unwrap();
    assert_eq!(profile.level, BuddyLevel::Gold);
    assert_eq!(profile.badges.len(), 1);
    assert_eq!(profile.badges[0].description, "");
    assert!(profile.achievements.is_empty());
}

#[test]
fn feedback_stats_decode_string_keyed_distribution() {
    let stats: FeedbackStats = serde_json::from_value(json!({
        "totalFeedback": 3,
        "averageRating": 4.33,
        "ratingDistribution": { "5": 2, "3": 1 }
    }))
    .unwrap();
    assert_eq!(stats.total_feedback, 3);
    assert_eq!(stats.rating_distribution.get(&5), Some(&2));
    assert_eq!(stats.rating_distribution.get(&4), None);
}

#[test]
fn dashboard_analytics_defaults_missing_counters() {
    let analytics: DashboardAnalytics =
        serde_json::from_value(json!({ "totalEmployees": 40, "activeMatches": 6 })).unwrap();
    assert_eq!(analytics.total_employees, 40);
    assert_eq!(analytics.active_matches, 6);
    assert_eq!(analytics.pending_matches, 0);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn create_match_request_omits_missing_notes() {
    let body = serde_json::to_value(CreateMatchRequest { buddy_id: 7, newcomer_id: 8, notes: None }).unwrap();
    assert_eq!(body, json!({ "buddyId": 7, "newcomerId": 8 }));
}

#[test]
fn buddy_profile_request_copies_profile_fields() {
    let mut profile = make_profile();
    profile.location_override = Some("Lisbon".to_owned());
    let request = BuddyProfileRequest::from(&profile);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["bio"], "Happy to help");
    assert_eq!(body["availability"], "Available");
    assert_eq!(body["maxActiveBuddies"], 3);
    assert_eq!(body["locationOverride"], "Lisbon");
}

#[test]
fn buddy_profile_request_sends_cleared_overrides_as_null() {
    let mut profile = make_profile();
    profile.unit_override = Some("Payments".to_owned());
    let mut request = BuddyProfileRequest::from(&profile);
    request.unit_override = None;

    let body = serde_json::to_value(&request).unwrap();
    let fields = body.as_object().unwrap();
    for key in ["locationOverride", "unitOverride", "techStackOverride", "interestsOverride"] {
        assert_eq!(fields.get(key), Some(&serde_json::Value::Null), "{key}");
    }
}

#[test]
fn feedback_request_serializes_type_in_pascal_case() {
    let body = serde_json::to_value(FeedbackRequest {
        match_id: 11,
        submitted_by_id: 8,
        rating: 5,
        comment: None,
        feedback_type: FeedbackType::NewcomerToBuddy,
    })
    .unwrap();
    assert_eq!(
        body,
        json!({ "matchId": 11, "submittedById": 8, "rating": 5, "feedbackType": "NewcomerToBuddy" })
    );
}
