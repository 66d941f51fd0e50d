//! REST API helpers for the buddy matching backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; pages stay
//! in their loading state until the browser takes over.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so a failed fetch
//! becomes an error banner with a retry button. Lookups where absence is a
//! normal state (a buddy guide without a profile) return `Ok(None)` on 404.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::endpoints::{self, Endpoint};
use models::error::optional;
use models::{
    ApiError, AwardPointsRequest, BuddyGameProfile, BuddyMatch, BuddyMatchRecommendation, BuddyPerformance, BuddyProfile,
    BuddyProfileRequest, CompatibilityScore, ConversationSummary, CreateEmployeeRequest, CreateMatchRequest,
    DashboardAnalytics, Employee, Feedback, FeedbackRequest, FeedbackStats, LeaderboardEntry, LeaderboardKind,
    MarkReadRequest, Message, RejectMatchRequest, SendMessageRequest, TrendPoint,
};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

/// API base URL baked in at build time from `BUDDY_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("BUDDY_API_URL").unwrap_or(endpoints::DEFAULT_API_URL)
}

async fn send<T: DeserializeOwned>(endpoint: Endpoint, body: Option<serde_json::Value>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        use models::endpoints::Method;

        let url = endpoint.url(api_base());
        let builder = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::warn!("{} {url} failed: {e}", endpoint.method.as_str());
            ApiError::Network(e.to_string())
        })?;
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("{} {url} returned {}", endpoint.method.as_str(), resp.status());
            return Err(ApiError::from_status(resp.status(), &text));
        }
        models::error::decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, ApiError> {
    send(endpoint, None).await
}

async fn post<B: Serialize, T: DeserializeOwned>(endpoint: Endpoint, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send(endpoint, Some(body)).await
}

async fn put<B: Serialize, T: DeserializeOwned>(endpoint: Endpoint, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send(endpoint, Some(body)).await
}

// =============================================================================
// EMPLOYEES
// =============================================================================

pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    get(endpoints::employees::list()).await
}

pub async fn fetch_employee(id: i64) -> Result<Employee, ApiError> {
    get(endpoints::employees::get(id)).await
}

pub async fn fetch_buddy_guides() -> Result<Vec<Employee>, ApiError> {
    get(endpoints::employees::buddy_guides()).await
}

pub async fn fetch_newcomers() -> Result<Vec<Employee>, ApiError> {
    get(endpoints::employees::newcomers()).await
}

pub async fn create_employee(request: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
    post(endpoints::employees::create(), request).await
}

pub async fn create_employee_buddy_profile(
    employee_id: i64,
    request: &BuddyProfileRequest,
) -> Result<BuddyProfile, ApiError> {
    post(endpoints::employees::create_buddy_profile(employee_id), request).await
}

// =============================================================================
// BUDDY PROFILES
// =============================================================================

pub async fn fetch_buddy_profiles() -> Result<Vec<BuddyProfile>, ApiError> {
    get(endpoints::buddies::list()).await
}

pub async fn fetch_buddy_profile(id: i64) -> Result<BuddyProfile, ApiError> {
    get(endpoints::buddies::get(id)).await
}

/// `Ok(None)` when the employee has no buddy profile yet.
pub async fn fetch_buddy_profile_for_employee(employee_id: i64) -> Result<Option<BuddyProfile>, ApiError> {
    optional(get(endpoints::buddies::by_employee(employee_id)).await)
}

pub async fn fetch_available_buddies() -> Result<Vec<BuddyProfile>, ApiError> {
    get(endpoints::buddies::available()).await
}

pub async fn update_buddy_profile(id: i64, request: &BuddyProfileRequest) -> Result<BuddyProfile, ApiError> {
    put(endpoints::buddies::update(id), request).await
}

// =============================================================================
// MATCHING
// =============================================================================

pub async fn fetch_recommendations(newcomer_id: i64, max: u32) -> Result<Vec<BuddyMatchRecommendation>, ApiError> {
    get(endpoints::matching::recommendations(newcomer_id, max)).await
}

pub async fn fetch_compatibility(buddy_id: i64, newcomer_id: i64) -> Result<CompatibilityScore, ApiError> {
    get(endpoints::matching::compatibility(buddy_id, newcomer_id)).await
}

pub async fn create_match(request: &CreateMatchRequest) -> Result<BuddyMatch, ApiError> {
    post(endpoints::matching::create(), request).await
}

/// The backend may answer with the updated match or an empty body.
pub async fn accept_match(match_id: i64) -> Result<Option<BuddyMatch>, ApiError> {
    post(endpoints::matching::accept(match_id), &serde_json::json!({})).await
}

pub async fn reject_match(match_id: i64, request: &RejectMatchRequest) -> Result<Option<BuddyMatch>, ApiError> {
    post(endpoints::matching::reject(match_id), request).await
}

// =============================================================================
// MATCHES
// =============================================================================

pub async fn fetch_matches() -> Result<Vec<BuddyMatch>, ApiError> {
    get(endpoints::matches::list()).await
}

pub async fn fetch_matches_for_buddy(buddy_id: i64) -> Result<Vec<BuddyMatch>, ApiError> {
    get(endpoints::matches::by_buddy(buddy_id)).await
}

pub async fn fetch_matches_for_newcomer(newcomer_id: i64) -> Result<Vec<BuddyMatch>, ApiError> {
    get(endpoints::matches::by_newcomer(newcomer_id)).await
}

pub async fn fetch_match(id: i64) -> Result<BuddyMatch, ApiError> {
    get(endpoints::matches::get(id)).await
}

// =============================================================================
// MESSAGING
// =============================================================================

pub async fn fetch_conversations(user_id: i64) -> Result<Vec<ConversationSummary>, ApiError> {
    get(endpoints::messaging::conversations(user_id)).await
}

pub async fn fetch_match_messages(match_id: i64) -> Result<Vec<Message>, ApiError> {
    get(endpoints::messaging::for_match(match_id)).await
}

pub async fn send_message(request: &SendMessageRequest) -> Result<Message, ApiError> {
    post(endpoints::messaging::send(), request).await
}

pub async fn mark_read(request: &MarkReadRequest) -> Result<(), ApiError> {
    post::<_, IgnoredAny>(endpoints::messaging::mark_read(), request)
        .await
        .map(|_| ())
}

// =============================================================================
// ANALYTICS
// =============================================================================

pub async fn fetch_dashboard_analytics() -> Result<DashboardAnalytics, ApiError> {
    get(endpoints::analytics::dashboard()).await
}

pub async fn fetch_buddy_performance(buddy_id: i64) -> Result<BuddyPerformance, ApiError> {
    get(endpoints::analytics::buddy_performance(buddy_id)).await
}

pub async fn fetch_trends() -> Result<Vec<TrendPoint>, ApiError> {
    get(endpoints::analytics::trends()).await
}

// =============================================================================
// GAMIFICATION
// =============================================================================

/// `Ok(None)` when the buddy has not earned anything yet.
pub async fn fetch_game_profile(buddy_id: i64) -> Result<Option<BuddyGameProfile>, ApiError> {
    optional(get(endpoints::gamification::profile(buddy_id)).await)
}

pub async fn fetch_leaderboard(kind: LeaderboardKind) -> Result<Vec<LeaderboardEntry>, ApiError> {
    get(endpoints::gamification::leaderboard(kind)).await
}

pub async fn award_points(request: &AwardPointsRequest) -> Result<(), ApiError> {
    post::<_, IgnoredAny>(endpoints::gamification::award_points(), request)
        .await
        .map(|_| ())
}

// =============================================================================
// FEEDBACK
// =============================================================================

pub async fn submit_feedback(request: &FeedbackRequest) -> Result<Feedback, ApiError> {
    post(endpoints::feedback::submit(), request).await
}

pub async fn fetch_match_feedback(match_id: i64) -> Result<Vec<Feedback>, ApiError> {
    get(endpoints::feedback::for_match(match_id)).await
}

pub async fn fetch_buddy_feedback_stats(buddy_id: i64) -> Result<FeedbackStats, ApiError> {
    get(endpoints::feedback::buddy_stats(buddy_id)).await
}

pub async fn fetch_overall_feedback_stats() -> Result<FeedbackStats, ApiError> {
    get(endpoints::feedback::overall_stats()).await
}
