//! HR matching workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! HR picks a newcomer, asks the backend for up to N ranked candidates, looks
//! at the illustrative breakdown for any of them, and creates a match. A
//! direct compatibility check against any available buddy covers the case
//! where HR already has someone in mind. The newcomer can be preselected via
//! `?newcomer=<id>` (the dashboard links here that way).

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use models::endpoints::{DEFAULT_MAX_RECOMMENDATIONS, MAX_RECOMMENDATIONS_LIMIT, clamp_max_recommendations};
use models::validation::{Validate, ValidationErrors, non_empty};
use models::{BuddyMatch, BuddyMatchRecommendation, BuddyProfile, CompatibilityScore, CreateMatchRequest, Employee};

use crate::components::compatibility_breakdown::CompatibilityBreakdown;
use crate::components::match_status_badge::ScoreBadge;
use crate::components::role_guard::RequireHr;
use crate::components::status::{EmptyState, ErrorBanner, remote_view};
use crate::components::tag_list::TagList;
use crate::net::api;
use crate::state::remote::{Keyed, Remote, spawn_fetch, spawn_keyed_fetch};
use crate::util::query::parse_id;

/// Parse the count input, falling back to the default for junk and clamping.
pub fn parse_max_recommendations(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .map_or(DEFAULT_MAX_RECOMMENDATIONS, clamp_max_recommendations)
}

/// Validated create-match request from the selection and notes input.
pub fn match_request(buddy_id: i64, newcomer_id: i64, notes: &str) -> Result<CreateMatchRequest, ValidationErrors> {
    let request = CreateMatchRequest {
        buddy_id,
        newcomer_id,
        notes: non_empty(notes),
    };
    request.validate()?;
    Ok(request)
}

/// Recommendations ordered best first; the backend usually does this already.
pub fn ranked(mut recs: Vec<BuddyMatchRecommendation>) -> Vec<BuddyMatchRecommendation> {
    recs.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
    recs
}

#[component]
pub fn MatchingPage() -> impl IntoView {
    view! {
        <RequireHr>
            <MatchingWorkflow/>
        </RequireHr>
    }
}

#[component]
fn MatchingWorkflow() -> impl IntoView {
    let query = use_query_map();
    let newcomers = RwSignal::new(Remote::<Vec<Employee>>::default());
    let newcomer_id = RwSignal::new(parse_id(query.read_untracked().get("newcomer").as_deref()));
    let max_input = RwSignal::new(DEFAULT_MAX_RECOMMENDATIONS.to_string());
    let recommendations = RwSignal::new(Remote::<Keyed<i64, Vec<BuddyMatchRecommendation>>>::Idle);
    let created = RwSignal::new(None::<BuddyMatch>);

    let load_newcomers = move || spawn_fetch(newcomers, api::fetch_newcomers());
    load_newcomers();
    let retry_newcomers = Callback::new(move |()| load_newcomers());

    let fetch_recommendations = move || {
        let Some(id) = newcomer_id.get_untracked() else {
            return;
        };
        let max = parse_max_recommendations(&max_input.get_untracked());
        max_input.set(max.to_string());
        created.set(None);
        spawn_keyed_fetch(
            recommendations,
            id,
            move || newcomer_id.try_get_untracked().flatten(),
            async move { api::fetch_recommendations(id, max).await.map(ranked) },
        );
    };
    let retry_recommendations = Callback::new(move |()| fetch_recommendations());

    // Preselected newcomer from the query string: fetch right away.
    if newcomer_id.get_untracked().is_some() {
        fetch_recommendations();
    }

    let on_created = Callback::new(move |m: BuddyMatch| {
        created.set(Some(m));
        recommendations.set(Remote::Idle);
    });

    view! {
        <div class="page matching-page">
            <header class="page__header">
                <h1>"Buddy matching"</h1>
            </header>
            <section class="detail-section">
                <h2>"1. Choose a newcomer"</h2>
                {move || remote_view(newcomers.get(), retry_newcomers, move |list| {
                    if list.is_empty() {
                        return view! { <EmptyState title="There are no newcomers"/> }.into_any();
                    }
                    view! {
                        <form
                            class="form form--inline"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                fetch_recommendations();
                            }
                        >
                            <select
                                class="input"
                                aria-label="Newcomer"
                                prop:value=move || newcomer_id.get().map(|id| id.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    newcomer_id.set(parse_id(Some(&event_target_value(&ev))));
                                    recommendations.set(Remote::Idle);
                                }
                            >
                                <option value="">"Select a newcomer"</option>
                                {list
                                    .into_iter()
                                    .map(|n| view! { <option value=n.id.to_string()>{n.full_name()}" · "{n.unit}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                            <label class="form__field form__field--inline">
                                <span>"Candidates"</span>
                                <input
                                    class="input input--narrow"
                                    type="number"
                                    min="1"
                                    max=MAX_RECOMMENDATIONS_LIMIT.to_string()
                                    prop:value=move || max_input.get()
                                    on:input=move |ev| max_input.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || newcomer_id.get().is_none()>
                                "Get recommendations"
                            </button>
                        </form>
                    }
                    .into_any()
                })}
            </section>
            {move || created.get().map(|m| view! {
                <div class="notice notice--success">
                    {format!("Match #{} created for {} and {}. ", m.id, m.buddy_name(), m.newcomer_name())}
                    <a href=format!("/matches/{}", m.id)>"Open match"</a>
                </div>
            })}
            <section class="detail-section">
                <h2>"2. Review candidates"</h2>
                {move || match recommendations.get().for_selection(newcomer_id.get().as_ref()) {
                    Remote::Idle => view! {
                        <EmptyState title="No recommendations requested" detail="Pick a newcomer and ask for candidates."/>
                    }
                    .into_any(),
                    remote => remote_view(remote, retry_recommendations, move |Keyed { key: newcomer, value: recs }| {
                        if recs.is_empty() {
                            return view! {
                                <EmptyState title="No suitable buddies right now" detail="Every guide may be at capacity."/>
                            }
                            .into_any();
                        }
                        view! {
                            <ol class="recommendations">
                                {recs
                                    .into_iter()
                                    .map(|rec| view! { <RecommendationCard rec=rec newcomer_id=newcomer on_created=on_created/> })
                                    .collect::<Vec<_>>()}
                            </ol>
                        }
                        .into_any()
                    }),
                }}
            </section>
            <Show when=move || newcomer_id.get().is_some()>
                <CompatibilityCheck newcomer_id=newcomer_id on_created=on_created/>
            </Show>
        </div>
    }
}

#[component]
fn RecommendationCard(rec: BuddyMatchRecommendation, newcomer_id: i64, on_created: Callback<BuddyMatch>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let name = rec.display_name();
    let score = rec.compatibility_score;
    let buddy_id = rec.buddy_id;
    let capacity = rec
        .buddy_profile
        .as_ref()
        .map(models::display::capacity_label)
        .unwrap_or_default();
    let flags = [
        rec.same_location.then_some("Same location"),
        rec.same_unit.then_some("Same unit"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <li class="recommendation">
            <header class="recommendation__header">
                <a href=format!("/employees/{buddy_id}") class="recommendation__name">{name}</a>
                <ScoreBadge score=score/>
                <span class="recommendation__capacity">{capacity}</span>
            </header>
            {rec.recommendation_reason.map(|r| view! { <p class="recommendation__reason">{r}</p> })}
            <dl class="facts facts--compact">
                <dt>"Shared tech"</dt>
                <dd><TagList tags=rec.matching_tech_stack/></dd>
                <dt>"Shared interests"</dt>
                <dd><TagList tags=rec.matching_interests/></dd>
            </dl>
            <p class="recommendation__flags">{flags}</p>
            <button class="btn btn--link" on:click=move |_| expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { "Hide breakdown" } else { "Show breakdown" }}
            </button>
            <Show when=move || expanded.get()>
                <CompatibilityBreakdown score=score/>
            </Show>
            <CreateMatchForm buddy_id=buddy_id newcomer_id=newcomer_id on_created=on_created/>
        </li>
    }
}

#[component]
fn CompatibilityCheck(newcomer_id: RwSignal<Option<i64>>, on_created: Callback<BuddyMatch>) -> impl IntoView {
    let buddies = RwSignal::new(Remote::<Vec<BuddyProfile>>::default());
    let buddy_id = RwSignal::new(None::<i64>);
    let score = RwSignal::new(Remote::<Keyed<(i64, i64), CompatibilityScore>>::Idle);
    let selection = move || buddy_id.get().zip(newcomer_id.get());
    // A check in flight for the previous newcomer will be discarded on arrival.
    Effect::new(move |_| {
        newcomer_id.track();
        score.set(Remote::Idle);
    });

    let load = move || spawn_fetch(buddies, api::fetch_available_buddies());
    load();
    let retry = Callback::new(move |()| load());

    let check = move || {
        if let Some((buddy, newcomer)) = buddy_id.get_untracked().zip(newcomer_id.get_untracked()) {
            spawn_keyed_fetch(
                score,
                (buddy, newcomer),
                move || {
                    let buddy = buddy_id.try_get_untracked().flatten()?;
                    let newcomer = newcomer_id.try_get_untracked().flatten()?;
                    Some((buddy, newcomer))
                },
                api::fetch_compatibility(buddy, newcomer),
            );
        }
    };
    let retry_check = Callback::new(move |()| check());

    view! {
        <section class="detail-section">
            <h2>"Check a specific buddy"</h2>
            {move || remote_view(buddies.get(), retry, move |list| view! {
                <form
                    class="form form--inline"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        check();
                    }
                >
                    <select
                        class="input"
                        aria-label="Buddy"
                        prop:value=move || buddy_id.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            buddy_id.set(parse_id(Some(&event_target_value(&ev))));
                            score.set(Remote::Idle);
                        }
                    >
                        <option value="">"Select an available buddy"</option>
                        {list
                            .into_iter()
                            .map(|p| view! { <option value=p.employee_id.to_string()>{p.display_name()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" type="submit" disabled=move || buddy_id.get().is_none()>"Check compatibility"</button>
                </form>
            })}
            {move || match score.get().for_selection(selection().as_ref()) {
                Remote::Idle => ().into_any(),
                remote => remote_view(remote, retry_check, move |Keyed { key: (buddy, newcomer), value: s }| view! {
                    <CompatibilityBreakdown score=s.compatibility_score/>
                    <CreateMatchForm buddy_id=buddy newcomer_id=newcomer on_created=on_created/>
                }),
            }}
        </section>
    }
}

#[component]
fn CreateMatchForm(buddy_id: i64, newcomer_id: i64, on_created: Callback<BuddyMatch>) -> impl IntoView {
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);
    #[cfg(not(feature = "hydrate"))]
    let _ = on_created;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match match_request(buddy_id, newcomer_id, &notes.get_untracked()) {
            Ok(request) => request,
            Err(invalid) => {
                failure.set(Some(invalid.to_string()));
                return;
            }
        };
        failure.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_match(&request).await {
                Ok(m) => on_created.run(m),
                Err(e) => failure.set(Some(format!("Could not create match: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="form form--inline create-match" on:submit=on_submit>
            <input
                class="input"
                type="text"
                placeholder="Notes for the pair (optional)"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Create match" }}
            </button>
            {move || failure.get().map(|message| view! { <ErrorBanner message=message/> })}
        </form>
    }
}
