//! Earned badge and achievement lists for the gamification views.

use leptos::prelude::*;
use models::{Achievement, Badge, date_part};

use crate::components::status::EmptyState;

#[component]
pub fn BadgeList(badges: Vec<Badge>) -> impl IntoView {
    if badges.is_empty() {
        return view! { <EmptyState title="No badges yet"/> }.into_any();
    }
    view! {
        <ul class="badge-list">
            {badges
                .into_iter()
                .map(|badge| {
                    let icon = badge.icon.unwrap_or_else(|| "🏅".to_owned());
                    let earned = badge.earned_at.as_deref().map(|at| format!("Earned {}", date_part(at)));
                    view! {
                        <li class="badge-list__item" title=badge.description.clone()>
                            <span class="badge-list__icon" aria-hidden="true">{icon}</span>
                            <span class="badge-list__name">{badge.name}</span>
                            <span class="badge-list__description">{badge.description.clone()}</span>
                            {earned.map(|e| view! { <span class="badge-list__earned">{e}</span> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn AchievementList(achievements: Vec<Achievement>) -> impl IntoView {
    if achievements.is_empty() {
        return view! { <EmptyState title="No achievements yet"/> }.into_any();
    }
    view! {
        <ul class="achievement-list">
            {achievements
                .into_iter()
                .map(|a| {
                    view! {
                        <li class="achievement-list__item">
                            <span class="achievement-list__title">{a.title}</span>
                            <span class="achievement-list__points">{format!("+{} pts", a.points)}</span>
                            <span class="achievement-list__description">{a.description}</span>
                            {a.earned_at.map(|at| view! { <span class="achievement-list__earned">{date_part(&at).to_owned()}</span> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
