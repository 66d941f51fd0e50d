//! Leaderboards plus the signed-in buddy's own level, streaks and badges.

#[cfg(test)]
#[path = "gamification_test.rs"]
mod gamification_test;

use leptos::prelude::*;
use models::{BuddyGameProfile, LeaderboardEntry, LeaderboardKind};

use crate::components::achievements::{AchievementList, BadgeList};
use crate::components::level_progress::LevelProgressBar;
use crate::components::role_guard::RequireSession;
use crate::components::stat_card::StatCard;
use crate::components::status::{EmptyState, remote_view};
use crate::net::api;
use crate::state::remote::{Keyed, Remote, spawn_fetch, spawn_keyed_fetch};
use crate::state::session::SessionState;

/// Leaderboard cell text for the ranked metric.
pub fn metric_text(kind: LeaderboardKind, value: u32) -> String {
    match kind {
        LeaderboardKind::Points => format!("{value} pts"),
        LeaderboardKind::Streak if value == 1 => "1 day".to_owned(),
        LeaderboardKind::Streak => format!("{value} days"),
        LeaderboardKind::Matches if value == 1 => "1 match".to_owned(),
        LeaderboardKind::Matches => format!("{value} matches"),
    }
}

#[component]
pub fn GamificationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let own_id = move || {
        session.with(|s| s.user.as_ref().filter(|u| u.is_buddy_guide).map(|u| u.id))
    };

    view! {
        <RequireSession>
            <div class="page gamification-page">
                <header class="page__header">
                    <h1>"Gamification"</h1>
                </header>
                {move || own_id().map(|id| view! { <OwnStanding buddy_id=id/> })}
                <Leaderboard/>
            </div>
        </RequireSession>
    }
}

#[component]
fn OwnStanding(buddy_id: i64) -> impl IntoView {
    let profile = RwSignal::new(Remote::<Option<BuddyGameProfile>>::default());
    let load = move || spawn_fetch(profile, api::fetch_game_profile(buddy_id));
    load();
    let retry = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Your progress"</h2>
            {move || remote_view(profile.get(), retry, |p| match p {
                None => view! {
                    <EmptyState title="No points yet" detail="Accepting and completing matches earns points and badges."/>
                }
                .into_any(),
                Some(p) => view! {
                    <LevelProgressBar level=p.level points=p.total_points/>
                    <div class="stat-grid">
                        <StatCard label="Current streak" value=metric_text(LeaderboardKind::Streak, p.current_streak)/>
                        <StatCard label="Longest streak" value=metric_text(LeaderboardKind::Streak, p.longest_streak)/>
                        <StatCard label="Badges" value=p.badges.len().to_string()/>
                    </div>
                    <h3>"Badges"</h3>
                    <BadgeList badges=p.badges/>
                    <h3>"Achievements"</h3>
                    <AchievementList achievements=p.achievements/>
                }
                .into_any(),
            })}
        </section>
    }
}

#[component]
fn Leaderboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let kind = RwSignal::new(LeaderboardKind::default());
    let entries = RwSignal::new(Remote::<Keyed<LeaderboardKind, Vec<LeaderboardEntry>>>::default());

    let load = move || {
        let requested = kind.get_untracked();
        spawn_keyed_fetch(entries, requested, move || kind.try_get_untracked(), api::fetch_leaderboard(requested));
    };
    load();
    let retry = Callback::new(move |()| load());
    let select = move |next: LeaderboardKind| {
        if kind.get_untracked() != next {
            kind.set(next);
            load();
        }
    };

    view! {
        <section class="detail-section">
            <h2>"Leaderboard"</h2>
            <div class="tabs" role="tablist">
                {LeaderboardKind::ALL
                    .into_iter()
                    .map(|k| view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || kind.get() == k
                            role="tab"
                            aria-selected=move || (kind.get() == k).to_string()
                            on:click=move |_| select(k)
                        >
                            {k.label()}
                        </button>
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                let selected = kind.get();
                let me = session.with(SessionState::user_id);
                // Idle here means the answer for the previous tab is still being replaced.
                let shown = match entries.get().for_selection(Some(&selected)) {
                    Remote::Idle => Remote::Loading,
                    other => other,
                };
                remote_view(shown, retry, move |Keyed { key: current, value: list }| {
                    if list.is_empty() {
                        return view! { <EmptyState title="Nobody on the board yet"/> }.into_any();
                    }
                    let rows = list
                        .into_iter()
                        .map(|e| view! {
                            <tr class:leaderboard__row--me={me == Some(e.buddy_id)}>
                                <td>{e.rank}</td>
                                <td><a href=format!("/employees/{}", e.buddy_id)>{e.buddy_name.clone()}</a></td>
                                <td>{e.level.label()}</td>
                                <td>{metric_text(current, e.metric(current))}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <table class="table leaderboard">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Buddy"</th>
                                    <th>"Level"</th>
                                    <th>{current.label()}</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_any()
                })
            }}
        </section>
    }
}
