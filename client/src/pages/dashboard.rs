//! Role-aware landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! HR sees programme health and the newcomers still waiting for a buddy.
//! Buddy guides see their capacity, their matches and their game profile.
//! Newcomers see their match or an "awaiting a buddy" state. A user with
//! several roles gets every matching section.

use leptos::prelude::*;
use models::display::{capacity_label, format_rating, format_score};
use models::{BuddyMatch, BuddyProfile, DashboardAnalytics, Employee, MatchStatus};

use crate::components::employee_card::EmployeeCard;
use crate::components::level_progress::LevelProgressBar;
use crate::components::match_list::MatchList;
use crate::components::match_status_badge::{MatchStatusBadge, ScoreBadge};
use crate::components::role_guard::RequireSession;
use crate::components::stat_card::StatCard;
use crate::components::status::{EmptyState, remote_view};
use crate::net::api;
use crate::state::matches::{current_for_newcomer, filter_by_status, newcomers_awaiting_buddy};
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    view! {
        <RequireSession>
            <div class="page dashboard-page">
                {move || {
                    session
                        .with(|s| s.user.clone())
                        .map(|user| {
                            let greeting = format!("Welcome, {}", user.first_name);
                            let hr = user.is_hr();
                            let guide = user.is_buddy_guide;
                            let newcomer = user.is_newcomer;
                            let plain = !(hr || guide || newcomer);
                            let id = user.id;
                            view! {
                                <h1>{greeting}</h1>
                                {hr.then(|| view! { <HrSection/> })}
                                {guide.then(|| view! { <BuddySection employee_id=id/> })}
                                {newcomer.then(|| view! { <NewcomerSection employee_id=id/> })}
                                {plain.then(|| view! {
                                    <EmptyState
                                        title="Nothing to do here yet"
                                        detail="Browse the buddy catalog or the leaderboard from the navigation bar."
                                    />
                                })}
                            }
                        })
                }}
            </div>
        </RequireSession>
    }
}

// =============================================================================
// HR
// =============================================================================

#[component]
fn HrSection() -> impl IntoView {
    let analytics = RwSignal::new(Remote::<DashboardAnalytics>::default());
    let matches = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let newcomers = RwSignal::new(Remote::<Vec<Employee>>::default());

    let load_analytics = move || spawn_fetch(analytics, api::fetch_dashboard_analytics());
    let load_lists = move || {
        spawn_fetch(matches, api::fetch_matches());
        spawn_fetch(newcomers, api::fetch_newcomers());
    };
    load_analytics();
    load_lists();
    let retry_analytics = Callback::new(move |()| load_analytics());
    let reload_lists = Callback::new(move |()| {
        load_lists();
        load_analytics();
    });

    let waiting = move || match (matches.get(), newcomers.get()) {
        (Remote::Ready(m), Remote::Ready(n)) => Remote::Ready(newcomers_awaiting_buddy(&n, &m)),
        (Remote::Failed(e), _) | (_, Remote::Failed(e)) => Remote::Failed(e),
        _ => Remote::Loading,
    };

    view! {
        <section class="dashboard-section">
            <h2>"Programme overview"</h2>
            {move || remote_view(analytics.get(), retry_analytics, |a| view! {
                <div class="stat-grid">
                    <StatCard label="Employees" value=a.total_employees.to_string() href="/employees"/>
                    <StatCard label="Buddy guides" value=a.total_buddy_guides.to_string() href="/buddies"/>
                    <StatCard label="Newcomers" value=a.total_newcomers.to_string()/>
                    <StatCard label="Active matches" value=a.active_matches.to_string() href="/matches"/>
                    <StatCard label="Pending matches" value=a.pending_matches.to_string()/>
                    <StatCard label="Avg. compatibility" value=format_score(a.average_compatibility_score)/>
                    <StatCard label="Avg. rating" value=format_rating(a.average_feedback_rating)/>
                </div>
            })}
        </section>
        <section class="dashboard-section">
            <h2>"Pending matches"</h2>
            {move || remote_view(matches.get(), reload_lists, move |all| view! {
                <MatchList
                    matches=filter_by_status(&all, Some(MatchStatus::Pending))
                    on_changed=reload_lists
                    empty_title="No matches awaiting a response"
                />
            })}
        </section>
        <section class="dashboard-section">
            <h2>"Newcomers awaiting a buddy"</h2>
            {move || remote_view(waiting(), reload_lists, |list| {
                if list.is_empty() {
                    return view! { <EmptyState title="Every newcomer has a buddy"/> }.into_any();
                }
                view! {
                    <ul class="card-grid">
                        {list
                            .into_iter()
                            .map(|n| {
                                let href = format!("/matching?newcomer={}", n.id);
                                view! {
                                    <li class="card-grid__item">
                                        <EmployeeCard employee=n/>
                                        <a class="btn btn--primary" href=href>"Find a buddy"</a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            })}
        </section>
    }
}

// =============================================================================
// BUDDY GUIDE
// =============================================================================

#[component]
fn BuddySection(employee_id: i64) -> impl IntoView {
    let profile = RwSignal::new(Remote::<Option<BuddyProfile>>::default());
    let matches = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let game = RwSignal::new(Remote::<Option<models::BuddyGameProfile>>::default());

    let load = move || {
        spawn_fetch(profile, api::fetch_buddy_profile_for_employee(employee_id));
        spawn_fetch(matches, api::fetch_matches_for_buddy(employee_id));
        spawn_fetch(game, api::fetch_game_profile(employee_id));
    };
    load();
    let reload = Callback::new(move |()| load());

    view! {
        <section class="dashboard-section">
            <h2>"Your buddy profile"</h2>
            {move || remote_view(profile.get(), reload, move |p| match p {
                Some(p) => view! {
                    <div class="stat-grid">
                        <StatCard label="Capacity" value=capacity_label(&p)/>
                        <StatCard
                            label="Status"
                            value={if p.can_accept_new_buddy { "Accepting newcomers" } else { "Full" }}
                        />
                        <StatCard label="Availability" value=p.availability.label() href=format!("/buddies/{}", p.id)/>
                    </div>
                }
                .into_any(),
                None => view! {
                    <EmptyState
                        title="No buddy profile yet"
                        detail="Create one from your employee page so HR can match you with newcomers."
                    />
                    <a class="btn btn--primary" href=format!("/employees/{employee_id}")>"Create profile"</a>
                }
                .into_any(),
            })}
        </section>
        <section class="dashboard-section">
            <h2>"Your matches"</h2>
            {move || remote_view(matches.get(), reload, move |list| view! {
                <MatchList matches=list on_changed=reload empty_title="No matches yet"/>
            })}
        </section>
        <section class="dashboard-section">
            <h2>"Your progress"</h2>
            {move || remote_view(game.get(), reload, |g| match g {
                Some(g) => view! {
                    <LevelProgressBar level=g.level points=g.total_points/>
                    <div class="stat-grid">
                        <StatCard label="Current streak" value=g.current_streak.to_string()/>
                        <StatCard label="Badges" value=g.badges.len().to_string() href="/gamification"/>
                    </div>
                }
                .into_any(),
                None => view! { <EmptyState title="No points yet" detail="Points arrive as your matches progress."/> }
                    .into_any(),
            })}
        </section>
    }
}

// =============================================================================
// NEWCOMER
// =============================================================================

#[component]
fn NewcomerSection(employee_id: i64) -> impl IntoView {
    let matches = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let load = move || spawn_fetch(matches, api::fetch_matches_for_newcomer(employee_id));
    load();
    let reload = Callback::new(move |()| load());

    view! {
        <section class="dashboard-section">
            <h2>"Your buddy"</h2>
            {move || remote_view(matches.get(), reload, move |list| {
                match current_for_newcomer(&list, employee_id).cloned() {
                    Some(m) => {
                        let buddy = m.buddy.clone();
                        view! {
                            <div class="match-summary">
                                <p>
                                    <MatchStatusBadge status=m.status/>
                                    " "
                                    <ScoreBadge score=m.compatibility_score/>
                                    " "
                                    <a href=format!("/matches/{}", m.id)>"View match"</a>
                                </p>
                                {match buddy {
                                    Some(b) => view! { <EmployeeCard employee=b/> }.into_any(),
                                    None => view! {
                                        <a href=format!("/employees/{}", m.buddy_id)>{m.buddy_name()}</a>
                                    }
                                    .into_any(),
                                }}
                            </div>
                        }
                        .into_any()
                    }
                    None => view! {
                        <EmptyState
                            title="Awaiting a buddy"
                            detail="HR will pair you with an experienced colleague soon."
                        />
                    }
                    .into_any(),
                }
            })}
        </section>
    }
}
