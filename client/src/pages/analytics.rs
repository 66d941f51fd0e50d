//! HR analytics: programme counters, monthly trends, feedback and a
//! per-buddy performance lookup.
//!
//! Each panel fetches independently so a slow or failing endpoint only
//! blanks its own section.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;
use models::display::{format_rating, format_score};
use models::{BuddyPerformance, DashboardAnalytics, Employee, FeedbackStats, TrendPoint};

use crate::components::feedback::FeedbackSummary;
use crate::components::role_guard::RequireHr;
use crate::components::stat_card::StatCard;
use crate::components::status::{EmptyState, remote_view};
use crate::net::api;
use crate::state::remote::{Keyed, Remote, spawn_fetch, spawn_keyed_fetch};
use crate::util::query::parse_id;

/// A rate as a whole percent. Values up to 1.0 are read as fractions,
/// anything larger as an already-scaled percentage.
pub fn format_rate(rate: f64) -> String {
    if rate <= 1.0 { format_score(rate * 100.0) } else { format_score(rate) }
}

/// Completed share of created matches in a period, `None` when nothing was created.
pub fn completion_ratio(point: &TrendPoint) -> Option<f64> {
    (point.matches_created > 0).then(|| f64::from(point.matches_completed) / f64::from(point.matches_created))
}

/// Completed share of a buddy's matches, `None` before their first match.
pub fn performance_completion(p: &BuddyPerformance) -> Option<f64> {
    (p.total_matches > 0).then(|| f64::from(p.completed_matches) / f64::from(p.total_matches))
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <RequireHr>
            <div class="page analytics-page">
                <header class="page__header">
                    <h1>"Analytics"</h1>
                </header>
                <Overview/>
                <Trends/>
                <OverallFeedback/>
                <PerformanceLookup/>
            </div>
        </RequireHr>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let analytics = RwSignal::new(Remote::<DashboardAnalytics>::default());
    let load = move || spawn_fetch(analytics, api::fetch_dashboard_analytics());
    load();
    let retry = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Overview"</h2>
            {move || remote_view(analytics.get(), retry, |a| view! {
                <div class="stat-grid">
                    <StatCard label="Employees" value=a.total_employees.to_string() href="/employees"/>
                    <StatCard label="Buddy guides" value=a.total_buddy_guides.to_string() href="/buddies"/>
                    <StatCard label="Newcomers" value=a.total_newcomers.to_string()/>
                    <StatCard label="Pending" value=a.pending_matches.to_string() href="/matches"/>
                    <StatCard label="Active" value=a.active_matches.to_string()/>
                    <StatCard label="Completed" value=a.completed_matches.to_string()/>
                    <StatCard label="Rejected" value=a.rejected_matches.to_string()/>
                    <StatCard label="Avg. compatibility" value=format_score(a.average_compatibility_score)/>
                    <StatCard label="Avg. feedback" value=format_rating(a.average_feedback_rating)/>
                    <StatCard label="Success rate" value=format_rate(a.match_success_rate)/>
                </div>
            })}
        </section>
    }
}

#[component]
fn Trends() -> impl IntoView {
    let trends = RwSignal::new(Remote::<Vec<TrendPoint>>::default());
    let load = move || spawn_fetch(trends, api::fetch_trends());
    load();
    let retry = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Trends"</h2>
            {move || remote_view(trends.get(), retry, |points| {
                if points.is_empty() {
                    return view! { <EmptyState title="No trend data yet"/> }.into_any();
                }
                let rows = points
                    .into_iter()
                    .map(|p| {
                        let completion = completion_ratio(&p).map_or_else(|| "—".to_owned(), format_rate);
                        view! {
                            <tr>
                                <td>{p.period.clone()}</td>
                                <td>{p.matches_created}</td>
                                <td>{p.matches_completed}</td>
                                <td>{completion}</td>
                                <td>{format_score(p.average_compatibility_score)}</td>
                                <td>{format_rating(p.average_rating)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <table class="table trends">
                        <thead>
                            <tr>
                                <th>"Period"</th>
                                <th>"Created"</th>
                                <th>"Completed"</th>
                                <th>"Completion"</th>
                                <th>"Avg. score"</th>
                                <th>"Avg. rating"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_any()
            })}
        </section>
    }
}

#[component]
fn OverallFeedback() -> impl IntoView {
    let stats = RwSignal::new(Remote::<FeedbackStats>::default());
    let load = move || spawn_fetch(stats, api::fetch_overall_feedback_stats());
    load();
    let retry = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Feedback"</h2>
            {move || remote_view(stats.get(), retry, |s| view! { <FeedbackSummary stats=s/> })}
        </section>
    }
}

#[component]
fn PerformanceLookup() -> impl IntoView {
    let guides = RwSignal::new(Remote::<Vec<Employee>>::default());
    let buddy_id = RwSignal::new(None::<i64>);
    let performance = RwSignal::new(Remote::<Keyed<i64, BuddyPerformance>>::Idle);

    let load_guides = move || spawn_fetch(guides, api::fetch_buddy_guides());
    load_guides();
    let retry_guides = Callback::new(move |()| load_guides());

    let lookup = move || {
        if let Some(id) = buddy_id.get_untracked() {
            spawn_keyed_fetch(
                performance,
                id,
                move || buddy_id.try_get_untracked().flatten(),
                api::fetch_buddy_performance(id),
            );
        }
    };
    let retry = Callback::new(move |()| lookup());

    view! {
        <section class="detail-section">
            <h2>"Buddy performance"</h2>
            {move || remote_view(guides.get(), retry_guides, move |list| {
                if list.is_empty() {
                    return view! { <EmptyState title="There are no buddy guides"/> }.into_any();
                }
                view! {
                    <select
                        class="input"
                        aria-label="Buddy guide"
                        prop:value=move || buddy_id.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            buddy_id.set(parse_id(Some(&event_target_value(&ev))));
                            performance.set(Remote::Idle);
                            lookup();
                        }
                    >
                        <option value="">"Select a buddy guide"</option>
                        {list
                            .into_iter()
                            .map(|g| view! { <option value=g.id.to_string()>{g.full_name()}" · "{g.unit}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                }
                .into_any()
            })}
            {move || match performance.get().for_selection(buddy_id.get().as_ref()) {
                Remote::Idle => view! { <p class="form__hint">"Pick a buddy guide to see their record."</p> }.into_any(),
                remote => remote_view(remote, retry, |Keyed { value: p, .. }| {
                    let name = p.buddy_name.clone().unwrap_or_else(|| format!("Employee #{}", p.buddy_id));
                    let completed_hint = performance_completion(&p).map(|r| format!("{} of all matches", format_rate(r)));
                    view! {
                        <h3><a href=format!("/employees/{}", p.buddy_id)>{name}</a></h3>
                        <div class="stat-grid">
                            <StatCard label="Total matches" value=p.total_matches.to_string()/>
                            <StatCard label="Active" value=p.active_matches.to_string()/>
                            <StatCard label="Completed" value=p.completed_matches.to_string() hint=completed_hint/>
                            <StatCard label="Rejected" value=p.rejected_matches.to_string()/>
                            <StatCard label="Avg. rating" value=format_rating(p.average_rating)/>
                            <StatCard label="Avg. compatibility" value=format_score(p.average_compatibility_score)/>
                        </div>
                    }
                }),
            }}
        </section>
    }
}
