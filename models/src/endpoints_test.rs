use super::*;

fn route(endpoint: &Endpoint) -> (&'static str, &str) {
    (endpoint.method.as_str(), endpoint.path.as_str())
}

#[test]
fn employee_routes() {
    assert_eq!(route(&employees::list()), ("GET", "/employees"));
    assert_eq!(route(&employees::get(4)), ("GET", "/employees/4"));
    assert_eq!(route(&employees::buddy_guides()), ("GET", "/employees/buddy-guides"));
    assert_eq!(route(&employees::newcomers()), ("GET", "/employees/newcomers"));
    assert_eq!(route(&employees::create()), ("POST", "/employees"));
    assert_eq!(
        route(&employees::create_buddy_profile(4)),
        ("POST", "/employees/4/buddy-profile")
    );
}

#[test]
fn buddy_routes() {
    assert_eq!(route(&buddies::list()), ("GET", "/buddies"));
    assert_eq!(route(&buddies::get(2)), ("GET", "/buddies/2"));
    assert_eq!(route(&buddies::by_employee(9)), ("GET", "/buddies/employee/9"));
    assert_eq!(route(&buddies::available()), ("GET", "/buddies/available"));
    assert_eq!(route(&buddies::create_for_employee(9)), ("POST", "/buddies/employee/9"));
    assert_eq!(route(&buddies::update(2)), ("PUT", "/buddies/2"));
}

#[test]
fn matching_routes() {
    assert_eq!(
        route(&matching::recommendations(8, 3)),
        ("GET", "/matching/recommendations/8?maxRecommendations=3")
    );
    assert_eq!(route(&matching::compatibility(7, 8)), ("GET", "/matching/compatibility/7/8"));
    assert_eq!(route(&matching::create()), ("POST", "/matching/create"));
    assert_eq!(route(&matching::accept(11)), ("POST", "/matching/accept/11"));
    assert_eq!(route(&matching::reject(11)), ("POST", "/matching/reject/11"));
}

#[test]
fn recommendation_count_is_clamped() {
    assert_eq!(
        matching::recommendations(8, 0).path,
        "/matching/recommendations/8?maxRecommendations=1"
    );
    assert_eq!(
        matching::recommendations(8, 500).path,
        "/matching/recommendations/8?maxRecommendations=20"
    );
    assert_eq!(clamp_max_recommendations(DEFAULT_MAX_RECOMMENDATIONS), 5);
}

#[test]
fn match_routes() {
    assert_eq!(route(&matches::list()), ("GET", "/matches"));
    assert_eq!(route(&matches::by_buddy(7)), ("GET", "/matches/buddy/7"));
    assert_eq!(route(&matches::by_newcomer(8)), ("GET", "/matches/newcomer/8"));
    assert_eq!(route(&matches::get(11)), ("GET", "/matches/11"));
}

#[test]
fn messaging_routes() {
    assert_eq!(route(&messaging::for_match(11)), ("GET", "/messaging/match/11"));
    assert_eq!(route(&messaging::send()), ("POST", "/messaging"));
    assert_eq!(route(&messaging::mark_read()), ("POST", "/messaging/mark-read"));
    assert_eq!(route(&messaging::conversations(8)), ("GET", "/messaging/conversations/8"));
}

#[test]
fn analytics_routes() {
    assert_eq!(route(&analytics::dashboard()), ("GET", "/analytics/dashboard"));
    assert_eq!(
        route(&analytics::buddy_performance(7)),
        ("GET", "/analytics/buddy/7/performance")
    );
    assert_eq!(route(&analytics::trends()), ("GET", "/analytics/trends"));
}

#[test]
fn gamification_routes() {
    assert_eq!(route(&gamification::profile(7)), ("GET", "/gamification/profile/7"));
    assert_eq!(
        route(&gamification::leaderboard(LeaderboardKind::Streak)),
        ("GET", "/gamification/leaderboard/streak")
    );
    assert_eq!(route(&gamification::award_points()), ("POST", "/gamification/award-points"));
}

#[test]
fn feedback_routes() {
    assert_eq!(route(&feedback::submit()), ("POST", "/feedback"));
    assert_eq!(route(&feedback::for_match(11)), ("GET", "/feedback/match/11"));
    assert_eq!(route(&feedback::buddy_stats(7)), ("GET", "/feedback/buddy/7/stats"));
    assert_eq!(route(&feedback::overall_stats()), ("GET", "/feedback/overall-stats"));
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://localhost:5000/api", "/employees"), "http://localhost:5000/api/employees");
    assert_eq!(join_url("http://localhost:5000/api/", "employees"), "http://localhost:5000/api/employees");
    assert_eq!(join_url(" https://hr.example/api// ", "//matches/1"), "https://hr.example/api/matches/1");
}

#[test]
fn endpoint_url_uses_base() {
    assert_eq!(
        matches::get(3).url(DEFAULT_API_URL),
        "http://localhost:5000/api/matches/3"
    );
}
