//! View-models mirroring the backend's JSON entities.
//!
//! DESIGN
//! ======
//! The backend serializes camelCase fields and PascalCase enum names, and is
//! loose about `null` versus missing for collections. Fields the UI can live
//! without decode to defaults so one sparse record never blanks a whole list.
//! Every buddy id in this model is the buddy guide's employee id.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// EMPLOYEES
// =============================================================================

/// Organizational role. Only HR gets the matching and analytics workflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    #[serde(rename = "HR", alias = "Hr")]
    Hr,
    #[default]
    Employee,
}

impl EmployeeRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Employee => "Employee",
        }
    }
}

/// An employee as returned by `/employees`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// ISO-8601 date or date-time; the backend is not consistent about which.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub role: EmployeeRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default)]
    pub is_buddy_guide: bool,
    #[serde(default)]
    pub is_newcomer: bool,
}

impl Employee {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }

    /// Up to two uppercase initials for avatar chips.
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn is_hr(&self) -> bool {
        self.role == EmployeeRole::Hr
    }

    /// The calendar-date part of `start_date`, if any.
    #[must_use]
    pub fn start_date_display(&self) -> Option<&str> {
        self.start_date.as_deref().map(date_part)
    }
}

// =============================================================================
// BUDDY PROFILES
// =============================================================================

/// Self-declared mentoring availability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Unavailable,
}

impl Availability {
    pub const ALL: [Self; 3] = [Self::Available, Self::Limited, Self::Unavailable];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Limited => "Limited",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown availability: {raw}"))
    }
}

/// A buddy guide's mentoring profile. Derived fields are server-computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyProfile {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub location_override: Option<String>,
    #[serde(default)]
    pub unit_override: Option<String>,
    #[serde(default)]
    pub tech_stack_override: Option<Vec<String>>,
    #[serde(default)]
    pub interests_override: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub max_active_buddies: u32,
    #[serde(default)]
    pub current_active_buddies: u32,
    #[serde(default)]
    pub can_accept_new_buddy: bool,
    #[serde(default)]
    pub availability_score: f64,
}

impl BuddyProfile {
    /// Employee name when embedded, otherwise a stable placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.employee
            .as_ref()
            .map_or_else(|| format!("Buddy #{}", self.employee_id), Employee::full_name)
    }

    #[must_use]
    pub fn effective_location(&self) -> Option<&str> {
        non_blank(self.location_override.as_deref())
            .or_else(|| non_blank(self.employee.as_ref().map(|e| e.location.as_str())))
    }

    #[must_use]
    pub fn effective_unit(&self) -> Option<&str> {
        non_blank(self.unit_override.as_deref())
            .or_else(|| non_blank(self.employee.as_ref().map(|e| e.unit.as_str())))
    }

    #[must_use]
    pub fn effective_tech_stack(&self) -> &[String] {
        match (&self.tech_stack_override, &self.employee) {
            (Some(list), _) if !list.is_empty() => list.as_slice(),
            (_, Some(employee)) => employee.tech_stack.as_slice(),
            _ => &[],
        }
    }

    #[must_use]
    pub fn effective_interests(&self) -> &[String] {
        match (&self.interests_override, &self.employee) {
            (Some(list), _) if !list.is_empty() => list.as_slice(),
            (_, Some(employee)) => employee.interests.as_slice(),
            _ => &[],
        }
    }

    #[must_use]
    pub fn free_capacity(&self) -> u32 {
        self.max_active_buddies.saturating_sub(self.current_active_buddies)
    }
}

// =============================================================================
// MATCHES
// =============================================================================

/// Server-owned lifecycle of a buddy match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Pending,
    Active,
    Rejected,
    Completed,
    Expired,
}

impl MatchStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Active,
        Self::Rejected,
        Self::Completed,
        Self::Expired,
    ];
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown match status: {raw}"))
    }
}

/// Pairing of a buddy guide and a newcomer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyMatch {
    pub id: i64,
    pub buddy_id: i64,
    pub newcomer_id: i64,
    #[serde(default)]
    pub buddy: Option<Employee>,
    #[serde(default)]
    pub newcomer: Option<Employee>,
    pub status: MatchStatus,
    #[serde(default)]
    pub compatibility_score: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub expired_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl BuddyMatch {
    #[must_use]
    pub fn involves(&self, employee_id: i64) -> bool {
        self.buddy_id == employee_id || self.newcomer_id == employee_id
    }

    /// Pending or Active: the newcomer is spoken for.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.status, MatchStatus::Pending | MatchStatus::Active)
    }

    #[must_use]
    pub fn buddy_name(&self) -> String {
        self.buddy
            .as_ref()
            .map_or_else(|| format!("Employee #{}", self.buddy_id), Employee::full_name)
    }

    #[must_use]
    pub fn newcomer_name(&self) -> String {
        self.newcomer
            .as_ref()
            .map_or_else(|| format!("Employee #{}", self.newcomer_id), Employee::full_name)
    }

    /// Transition timestamps that are set, in lifecycle order.
    #[must_use]
    pub fn timeline(&self) -> Vec<(&'static str, &str)> {
        [
            ("Created", &self.created_at),
            ("Accepted", &self.accepted_at),
            ("Rejected", &self.rejected_at),
            ("Completed", &self.completed_at),
            ("Expired", &self.expired_at),
        ]
        .into_iter()
        .filter_map(|(label, at)| at.as_deref().map(|at| (label, at)))
        .collect()
    }
}

/// Transient recommendation produced by the matching endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyMatchRecommendation {
    pub buddy_id: i64,
    #[serde(default)]
    pub buddy: Option<Employee>,
    #[serde(default)]
    pub buddy_profile: Option<BuddyProfile>,
    pub compatibility_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matching_tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matching_interests: Vec<String>,
    #[serde(default)]
    pub same_location: bool,
    #[serde(default)]
    pub same_unit: bool,
    #[serde(default)]
    pub recommendation_reason: Option<String>,
}

impl BuddyMatchRecommendation {
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(buddy) = &self.buddy {
            return buddy.full_name();
        }
        self.buddy_profile
            .as_ref()
            .map_or_else(|| format!("Buddy #{}", self.buddy_id), BuddyProfile::display_name)
    }
}

/// Result of `GET /matching/compatibility/{buddyId}/{newcomerId}`.
///
/// Decodes from either a bare number or an object carrying
/// `compatibilityScore` (or `score`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub compatibility_score: f64,
}

impl<'de> Deserialize<'de> for CompatibilityScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(f64),
            Wrapped {
                #[serde(rename = "compatibilityScore", alias = "score")]
                compatibility_score: f64,
            },
        }

        let compatibility_score = match Raw::deserialize(deserializer)? {
            Raw::Bare(score) | Raw::Wrapped { compatibility_score: score } => score,
        };
        Ok(Self { compatibility_score })
    }
}

// =============================================================================
// MESSAGING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub match_id: i64,
    pub sender_id: i64,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub match_id: i64,
    pub other_participant_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_participant_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub match_id: i64,
    pub sender_id: i64,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub match_id: i64,
    pub user_id: i64,
}

// =============================================================================
// ANALYTICS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardAnalytics {
    pub total_employees: u32,
    pub total_buddy_guides: u32,
    pub total_newcomers: u32,
    pub active_matches: u32,
    pub pending_matches: u32,
    pub completed_matches: u32,
    pub rejected_matches: u32,
    pub average_compatibility_score: f64,
    pub average_feedback_rating: f64,
    pub match_success_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuddyPerformance {
    pub buddy_id: i64,
    pub buddy_name: Option<String>,
    pub total_matches: u32,
    pub active_matches: u32,
    pub completed_matches: u32,
    pub rejected_matches: u32,
    pub average_rating: f64,
    pub average_compatibility_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendPoint {
    pub period: String,
    pub matches_created: u32,
    pub matches_completed: u32,
    pub average_compatibility_score: f64,
    pub average_rating: f64,
}

// =============================================================================
// GAMIFICATION
// =============================================================================

/// Server-assigned engagement tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuddyLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl BuddyLevel {
    pub const ALL: [Self; 5] = [
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Diamond,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub earned_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub earned_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyGameProfile {
    pub buddy_id: i64,
    #[serde(default)]
    pub buddy_name: Option<String>,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub level: BuddyLevel,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<Achievement>,
}

/// Ranking dimension for `/gamification/leaderboard/{type}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaderboardKind {
    #[default]
    Points,
    Streak,
    Matches,
}

impl LeaderboardKind {
    pub const ALL: [Self; 3] = [Self::Points, Self::Streak, Self::Matches];

    /// Lowercase path segment.
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Streak => "streak",
            Self::Matches => "matches",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Points => "Points",
            Self::Streak => "Streak",
            Self::Matches => "Matches",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for LeaderboardKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_path().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown leaderboard type: {raw} (expected points, streak or matches)"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: u32,
    pub buddy_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buddy_name: String,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub level: BuddyLevel,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub completed_matches: u32,
}

impl LeaderboardEntry {
    /// The value the given leaderboard ranks by.
    #[must_use]
    pub fn metric(&self, kind: LeaderboardKind) -> u32 {
        match kind {
            LeaderboardKind::Points => self.total_points,
            LeaderboardKind::Streak => self.current_streak,
            LeaderboardKind::Matches => self.completed_matches,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardPointsRequest {
    pub buddy_id: i64,
    pub points: u32,
    pub reason: String,
}

// =============================================================================
// FEEDBACK
// =============================================================================

/// Who is rating whom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackType {
    #[default]
    NewcomerToBuddy,
    BuddyToNewcomer,
}

impl FeedbackType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NewcomerToBuddy => "Newcomer → Buddy",
            Self::BuddyToNewcomer => "Buddy → Newcomer",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub match_id: i64,
    pub submitted_by_id: i64,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub match_id: i64,
    pub submitted_by_id: i64,
    #[serde(default)]
    pub submitted_by_name: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub feedback_type: FeedbackType,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackStats {
    pub total_feedback: u32,
    pub average_rating: f64,
    /// Star rating (1-5) to count. JSON object keys are stringified numbers.
    pub rating_distribution: BTreeMap<u8, u32>,
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub location: String,
    pub start_date: String,
    pub role: EmployeeRole,
    pub is_buddy_guide: bool,
    pub is_newcomer: bool,
    pub tech_stack: Vec<String>,
    pub interests: Vec<String>,
}

/// Body for creating (`POST`) or replacing (`PUT`) a buddy profile.
///
/// Unset overrides are sent as explicit `null` so a `PUT` clears them
/// instead of leaving the stored value untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyProfileRequest {
    pub bio: String,
    pub specialties: Vec<String>,
    pub availability: Availability,
    pub max_active_buddies: u32,
    pub location_override: Option<String>,
    pub unit_override: Option<String>,
    pub tech_stack_override: Option<Vec<String>>,
    pub interests_override: Option<Vec<String>>,
}

impl Default for BuddyProfileRequest {
    fn default() -> Self {
        Self {
            bio: String::new(),
            specialties: Vec::new(),
            availability: Availability::Available,
            max_active_buddies: 2,
            location_override: None,
            unit_override: None,
            tech_stack_override: None,
            interests_override: None,
        }
    }
}

impl From<&BuddyProfile> for BuddyProfileRequest {
    fn from(profile: &BuddyProfile) -> Self {
        Self {
            bio: profile.bio.clone(),
            specialties: profile.specialties.clone(),
            availability: profile.availability,
            max_active_buddies: profile.max_active_buddies,
            location_override: profile.location_override.clone(),
            unit_override: profile.unit_override.clone(),
            tech_stack_override: profile.tech_stack_override.clone(),
            interests_override: profile.interests_override.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub buddy_id: i64,
    pub newcomer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectMatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Calendar-date prefix of an ISO-8601 timestamp (`2024-03-01T09:00:00` -> `2024-03-01`).
#[must_use]
pub fn date_part(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}
