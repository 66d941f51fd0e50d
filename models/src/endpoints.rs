//! Catalog of backend REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client (`gloo-net`) and the CLI (`reqwest`) both resolve
//! paths here, so a route change lands in one place. Paths are relative to
//! the API base URL, which already carries any `/api` prefix.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::types::LeaderboardKind;

/// Fallback API base URL when `BUDDY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "BUDDY_API_URL";

pub const DEFAULT_MAX_RECOMMENDATIONS: u32 = 5;
pub const MAX_RECOMMENDATIONS_LIMIT: u32 = 20;

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A resolved route: verb plus path (with query string, if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into() }
    }

    fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into() }
    }

    fn put(path: impl Into<String>) -> Self {
        Self { method: Method::Put, path: path.into() }
    }

    /// Absolute URL against `base`.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        join_url(base, &self.path)
    }
}

/// Join a base URL and a path with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Keep recommendation counts within what the UI can lay out.
#[must_use]
pub fn clamp_max_recommendations(requested: u32) -> u32 {
    requested.clamp(1, MAX_RECOMMENDATIONS_LIMIT)
}

pub mod employees {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/employees")
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::get(format!("/employees/{id}"))
    }

    #[must_use]
    pub fn buddy_guides() -> Endpoint {
        Endpoint::get("/employees/buddy-guides")
    }

    #[must_use]
    pub fn newcomers() -> Endpoint {
        Endpoint::get("/employees/newcomers")
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/employees")
    }

    #[must_use]
    pub fn create_buddy_profile(employee_id: i64) -> Endpoint {
        Endpoint::post(format!("/employees/{employee_id}/buddy-profile"))
    }
}

pub mod buddies {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/buddies")
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::get(format!("/buddies/{id}"))
    }

    #[must_use]
    pub fn by_employee(employee_id: i64) -> Endpoint {
        Endpoint::get(format!("/buddies/employee/{employee_id}"))
    }

    #[must_use]
    pub fn available() -> Endpoint {
        Endpoint::get("/buddies/available")
    }

    #[must_use]
    pub fn create_for_employee(employee_id: i64) -> Endpoint {
        Endpoint::post(format!("/buddies/employee/{employee_id}"))
    }

    #[must_use]
    pub fn update(id: i64) -> Endpoint {
        Endpoint::put(format!("/buddies/{id}"))
    }
}

pub mod matching {
    use super::{Endpoint, clamp_max_recommendations};

    /// `max` is clamped to `1..=20`.
    #[must_use]
    pub fn recommendations(newcomer_id: i64, max: u32) -> Endpoint {
        let max = clamp_max_recommendations(max);
        Endpoint::get(format!(
            "/matching/recommendations/{newcomer_id}?maxRecommendations={max}"
        ))
    }

    #[must_use]
    pub fn compatibility(buddy_id: i64, newcomer_id: i64) -> Endpoint {
        Endpoint::get(format!("/matching/compatibility/{buddy_id}/{newcomer_id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/matching/create")
    }

    #[must_use]
    pub fn accept(match_id: i64) -> Endpoint {
        Endpoint::post(format!("/matching/accept/{match_id}"))
    }

    #[must_use]
    pub fn reject(match_id: i64) -> Endpoint {
        Endpoint::post(format!("/matching/reject/{match_id}"))
    }
}

pub mod matches {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/matches")
    }

    #[must_use]
    pub fn by_buddy(buddy_id: i64) -> Endpoint {
        Endpoint::get(format!("/matches/buddy/{buddy_id}"))
    }

    #[must_use]
    pub fn by_newcomer(newcomer_id: i64) -> Endpoint {
        Endpoint::get(format!("/matches/newcomer/{newcomer_id}"))
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::get(format!("/matches/{id}"))
    }
}

pub mod messaging {
    use super::Endpoint;

    #[must_use]
    pub fn for_match(match_id: i64) -> Endpoint {
        Endpoint::get(format!("/messaging/match/{match_id}"))
    }

    #[must_use]
    pub fn send() -> Endpoint {
        Endpoint::post("/messaging")
    }

    #[must_use]
    pub fn mark_read() -> Endpoint {
        Endpoint::post("/messaging/mark-read")
    }

    #[must_use]
    pub fn conversations(user_id: i64) -> Endpoint {
        Endpoint::get(format!("/messaging/conversations/{user_id}"))
    }
}

pub mod analytics {
    use super::Endpoint;

    #[must_use]
    pub fn dashboard() -> Endpoint {
        Endpoint::get("/analytics/dashboard")
    }

    #[must_use]
    pub fn buddy_performance(buddy_id: i64) -> Endpoint {
        Endpoint::get(format!("/analytics/buddy/{buddy_id}/performance"))
    }

    #[must_use]
    pub fn trends() -> Endpoint {
        Endpoint::get("/analytics/trends")
    }
}

pub mod gamification {
    use super::{Endpoint, LeaderboardKind};

    #[must_use]
    pub fn profile(buddy_id: i64) -> Endpoint {
        Endpoint::get(format!("/gamification/profile/{buddy_id}"))
    }

    #[must_use]
    pub fn leaderboard(kind: LeaderboardKind) -> Endpoint {
        Endpoint::get(format!("/gamification/leaderboard/{}", kind.as_path()))
    }

    #[must_use]
    pub fn award_points() -> Endpoint {
        Endpoint::post("/gamification/award-points")
    }
}

pub mod feedback {
    use super::Endpoint;

    #[must_use]
    pub fn submit() -> Endpoint {
        Endpoint::post("/feedback")
    }

    #[must_use]
    pub fn for_match(match_id: i64) -> Endpoint {
        Endpoint::get(format!("/feedback/match/{match_id}"))
    }

    #[must_use]
    pub fn buddy_stats(buddy_id: i64) -> Endpoint {
        Endpoint::get(format!("/feedback/buddy/{buddy_id}/stats"))
    }

    #[must_use]
    pub fn overall_stats() -> Endpoint {
        Endpoint::get("/feedback/overall-stats")
    }
}
