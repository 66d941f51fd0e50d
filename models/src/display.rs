//! Presentation-only derivations over server-computed values.
//!
//! DESIGN
//! ======
//! Nothing here feeds back into a request. The compatibility breakdown and
//! level thresholds are fixed approximations for illustration; the score and
//! level the backend reports are always the values shown as authoritative.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::types::{BuddyLevel, BuddyProfile, MatchStatus};

// =============================================================================
// COMPATIBILITY
// =============================================================================

/// Illustrative split of a compatibility score across matching factors.
pub const BREAKDOWN_WEIGHTS: [(&str, f64); 4] = [
    ("Tech stack", 0.40),
    ("Interests", 0.30),
    ("Location", 0.20),
    ("Organizational unit", 0.10),
];

/// One row of the approximate breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub label: &'static str,
    /// Share of the total, `0.0..=1.0`.
    pub weight: f64,
    /// Points attributed to this factor on the 0-100 scale.
    pub points: f64,
}

impl BreakdownRow {
    /// Whole-number percent of the weight, for labels like `40%`.
    #[must_use]
    pub fn weight_percent(&self) -> u32 {
        percent_u32(self.weight * 100.0)
    }
}

/// Clamp a score onto the 0-100 scale. Non-finite scores become 0.
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 }
}

/// Split `score` over [`BREAKDOWN_WEIGHTS`]. Rows sum to the clamped score.
#[must_use]
pub fn compatibility_breakdown(score: f64) -> Vec<BreakdownRow> {
    let total = clamp_score(score);
    BREAKDOWN_WEIGHTS
        .iter()
        .map(|&(label, weight)| BreakdownRow {
            label,
            weight,
            points: total * weight,
        })
        .collect()
}

/// Coarse band used for coloring scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompatibilityTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl CompatibilityTier {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Low => "low",
        }
    }
}

/// `87.4` -> `"87%"`.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{}%", percent_u32(clamp_score(score)))
}

/// `4.25` -> `"4.3 / 5"`; zero means no ratings yet.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    if rating <= 0.0 || !rating.is_finite() {
        return "No ratings".to_owned();
    }
    format!("{:.1} / 5", rating.min(5.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

// =============================================================================
// MATCH STATUS
// =============================================================================

impl MatchStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Expired => "Expired",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }

    /// No further transitions follow.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Expired)
    }

    /// Accept and reject are only offered while pending.
    #[must_use]
    pub fn allows_response(self) -> bool {
        self == Self::Pending
    }
}

// =============================================================================
// LEVELS
// =============================================================================

impl BuddyLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
        }
    }

    /// Display threshold in points for reaching this level.
    #[must_use]
    pub fn threshold(self) -> u32 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 500,
            Self::Gold => 1500,
            Self::Platinum => 3000,
            Self::Diamond => 6000,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        let at = Self::ALL.iter().position(|l| *l == self)?;
        Self::ALL.get(at + 1).copied()
    }
}

/// Progress bar state toward the level after `level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelProgress {
    pub level: BuddyLevel,
    pub next: Option<BuddyLevel>,
    /// `0.0..=1.0`; always `1.0` at the top level.
    pub fraction: f64,
    /// Points still needed for `next`, zero at the top level.
    pub points_to_next: u32,
}

impl LevelProgress {
    /// `level` is the server's value; `points` only positions the bar.
    #[must_use]
    pub fn new(level: BuddyLevel, points: u32) -> Self {
        let Some(next) = level.next() else {
            return Self {
                level,
                next: None,
                fraction: 1.0,
                points_to_next: 0,
            };
        };
        let floor = level.threshold();
        let ceiling = next.threshold();
        let span = f64::from(ceiling - floor);
        let earned = f64::from(points.saturating_sub(floor));
        Self {
            level,
            next: Some(next),
            fraction: (earned / span).clamp(0.0, 1.0),
            points_to_next: ceiling.saturating_sub(points),
        }
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        percent_u32(self.fraction * 100.0)
    }
}

// =============================================================================
// CAPACITY
// =============================================================================

/// `"1/3 buddies"`.
#[must_use]
pub fn capacity_label(profile: &BuddyProfile) -> String {
    format!(
        "{}/{} buddies",
        profile.current_active_buddies, profile.max_active_buddies
    )
}
