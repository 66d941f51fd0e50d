//! Buddy profile detail: effective attributes, capacity, ratings and
//! gamification standing.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::display::capacity_label;
use models::{BuddyGameProfile, BuddyProfile, FeedbackStats};

use crate::components::achievements::BadgeList;
use crate::components::feedback::FeedbackSummary;
use crate::components::level_progress::LevelProgressBar;
use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, remote_view};
use crate::components::tag_list::TagList;
use crate::net::api;
use crate::state::remote::{Remote, spawn_fetch};
use crate::util::query::parse_id;

#[component]
pub fn BuddyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| parse_id(params.read().get("id").as_deref()));
    view! {
        <RequireSession>
            <div class="page buddy-detail-page">
                <a class="back-link" href="/buddies">"← Buddy catalog"</a>
                {move || match id.get() {
                    Some(id) => view! { <BuddyDetail id=id/> }.into_any(),
                    None => view! { <EmptyState title="Buddy profile not found"/> }.into_any(),
                }}
            </div>
        </RequireSession>
    }
}

#[component]
fn BuddyDetail(id: i64) -> impl IntoView {
    let profile = RwSignal::new(Remote::<BuddyProfile>::default());
    let load = move || spawn_fetch(profile, api::fetch_buddy_profile(id));
    load();
    let retry = Callback::new(move |()| load());

    move || {
        remote_view(profile.get(), retry, |p| {
            let name = p.display_name();
            let title = p.employee.as_ref().map(|e| e.title.clone()).unwrap_or_default();
            let location = p.effective_location().unwrap_or("—").to_owned();
            let unit = p.effective_unit().unwrap_or("—").to_owned();
            let overridden = p.location_override.is_some() || p.unit_override.is_some();
            view! {
                <header class="page__header">
                    <div>
                        <h1>{name}</h1>
                        <p class="page__subtitle">{title}</p>
                    </div>
                    <a class="btn" href=format!("/employees/{}", p.employee_id)>"Employee record"</a>
                </header>
                <p class="profile-bio">{p.bio.clone()}</p>
                <dl class="facts">
                    <dt>"Availability"</dt>
                    <dd>{p.availability.label()}{format!(" (score {:.2})", p.availability_score)}</dd>
                    <dt>"Capacity"</dt>
                    <dd>{capacity_label(&p)}{if p.can_accept_new_buddy { " · accepting" } else { " · full" }}</dd>
                    <dt>"Unit"</dt>
                    <dd>{unit}</dd>
                    <dt>"Location"</dt>
                    <dd>{location}</dd>
                    <dt>"Tech stack"</dt>
                    <dd><TagList tags=p.effective_tech_stack().to_vec()/></dd>
                    <dt>"Interests"</dt>
                    <dd><TagList tags=p.effective_interests().to_vec()/></dd>
                    <dt>"Specialties"</dt>
                    <dd><TagList tags=p.specialties.clone()/></dd>
                </dl>
                {overridden.then(|| view! {
                    <p class="form__hint">"Some attributes are overridden on this profile."</p>
                })}
                <BuddyStanding buddy_id=p.employee_id/>
            }
        })
    }
}

#[component]
fn BuddyStanding(buddy_id: i64) -> impl IntoView {
    let stats = RwSignal::new(Remote::<FeedbackStats>::default());
    let game = RwSignal::new(Remote::<Option<BuddyGameProfile>>::default());
    let load = move || {
        spawn_fetch(stats, api::fetch_buddy_feedback_stats(buddy_id));
        spawn_fetch(game, api::fetch_game_profile(buddy_id));
    };
    load();
    let reload = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Ratings"</h2>
            {move || remote_view(stats.get(), reload, |s| view! { <FeedbackSummary stats=s/> })}
        </section>
        <section class="detail-section">
            <h2>"Gamification"</h2>
            {move || remote_view(game.get(), reload, |g| match g {
                Some(g) => view! {
                    <LevelProgressBar level=g.level points=g.total_points/>
                    <p class="streaks">
                        {format!("Current streak {} · longest {}", g.current_streak, g.longest_streak)}
                    </p>
                    <BadgeList badges=g.badges/>
                }
                .into_any(),
                None => view! { <EmptyState title="No gamification profile yet"/> }.into_any(),
            })}
        </section>
    }
}
