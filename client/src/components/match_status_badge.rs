//! Match status and compatibility score badges.

use leptos::prelude::*;
use models::MatchStatus;
use models::display::{CompatibilityTier, format_score};

#[component]
pub fn MatchStatusBadge(status: MatchStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-badge--{}", status.css_modifier())>{status.label()}</span>
    }
}

/// Compatibility percentage colored by tier.
#[component]
pub fn ScoreBadge(score: f64) -> impl IntoView {
    let tier = CompatibilityTier::from_score(score);
    view! {
        <span class=format!("score-badge score-badge--{}", tier.css_modifier()) title=tier.label()>
            {format_score(score)}
        </span>
    }
}
