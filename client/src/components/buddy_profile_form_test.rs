use super::*;

fn draft() -> ProfileDraft {
    ProfileDraft {
        bio: "  Ten years on the platform team ".to_owned(),
        specialties: "Onboarding; onboarding, Kubernetes".to_owned(),
        availability: Availability::Limited,
        max_active_buddies: " 3 ".to_owned(),
        location_override: "   ".to_owned(),
        unit_override: "Platform".to_owned(),
        tech_stack_override: String::new(),
        interests_override: "Chess".to_owned(),
    }
}

#[test]
fn default_draft_uses_request_defaults() {
    let d = ProfileDraft::default();
    assert_eq!(d.max_active_buddies, "2");
    assert_eq!(d.availability, Availability::Available);
    assert!(d.bio.is_empty());
}

#[test]
fn to_request_normalizes_fields() {
    let request = draft().to_request().unwrap();
    assert_eq!(request.bio, "Ten years on the platform team");
    assert_eq!(request.specialties, ["Onboarding", "Kubernetes"]);
    assert_eq!(request.max_active_buddies, 3);
    assert_eq!(request.location_override, None);
    assert_eq!(request.unit_override.as_deref(), Some("Platform"));
    assert_eq!(request.tech_stack_override, None);
    assert_eq!(request.interests_override, Some(vec!["Chess".to_owned()]));
}

#[test]
fn to_request_reports_parse_and_range_errors_once() {
    let mut d = draft();
    d.max_active_buddies = "lots".to_owned();
    d.bio = String::new();
    let errors = d.to_request().unwrap_err();
    assert_eq!(errors.for_field("maxActiveBuddies"), Some("Max active buddies must be a whole number"));
    assert!(errors.for_field("bio").is_some());
    assert_eq!(errors.errors.len(), 2);
}

#[test]
fn to_request_rejects_capacity_out_of_range() {
    let mut d = draft();
    d.max_active_buddies = "11".to_owned();
    assert!(d.to_request().unwrap_err().for_field("maxActiveBuddies").is_some());
}

#[test]
fn draft_round_trips_existing_request() {
    let request = draft().to_request().unwrap();
    let again = ProfileDraft::from_request(&request).to_request().unwrap();
    assert_eq!(again, request);
}
