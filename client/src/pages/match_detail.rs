//! Match detail: participants, timeline, compatibility, actions, feedback.
//!
//! Visibility follows the same rule as the match list. A participant who is
//! not allowed to see the match (or anyone with a stale link) gets an empty
//! state instead of the record, even though the backend returned it.
//!
//! Accept/reject and feedback submission reload the match so status and
//! timeline always reflect the backend rather than a local guess.

#[cfg(test)]
#[path = "match_detail_test.rs"]
mod match_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::validation::{Validate, ValidationErrors};
use models::{AwardPointsRequest, BuddyMatch, Feedback};

use crate::components::compatibility_breakdown::CompatibilityBreakdown;
use crate::components::feedback::{FeedbackForm, FeedbackList};
use crate::components::match_actions::MatchActions;
use crate::components::match_status_badge::MatchStatusBadge;
use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, ErrorBanner, remote_view};
use crate::net::api;
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::{SessionState, can_leave_feedback, can_respond, can_view_match, feedback_type_for};
use crate::util::query::parse_id;

/// Validated award from raw form input.
pub fn award_request(buddy_id: i64, points: &str, reason: &str) -> Result<AwardPointsRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let points = points.trim().parse::<u32>().unwrap_or_else(|_| {
        errors.push("points", "Points must be a whole number");
        0
    });
    if !errors.is_empty() {
        return Err(errors);
    }
    let request = AwardPointsRequest {
        buddy_id,
        points,
        reason: reason.trim().to_owned(),
    };
    request.validate()?;
    Ok(request)
}

/// Whether `user_id` already left feedback on this match.
pub fn has_submitted(feedback: &[Feedback], user_id: i64) -> bool {
    feedback.iter().any(|f| f.submitted_by_id == user_id)
}

#[component]
pub fn MatchDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| parse_id(params.read().get("id").as_deref()));
    view! {
        <RequireSession>
            <div class="page match-detail-page">
                <a class="back-link" href="/matches">"← Matches"</a>
                {move || match id.get() {
                    Some(id) => view! { <MatchDetail id=id/> }.into_any(),
                    None => view! { <EmptyState title="Match not found"/> }.into_any(),
                }}
            </div>
        </RequireSession>
    }
}

#[component]
fn MatchDetail(id: i64) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let record = RwSignal::new(Remote::<BuddyMatch>::default());
    let load = move || spawn_fetch(record, api::fetch_match(id));
    load();
    let reload = Callback::new(move |()| load());

    move || {
        let user = session.with(|s| s.user.clone());
        remote_view(record.get(), reload, move |m| {
            let Some(user) = user.filter(|u| can_view_match(u, &m)) else {
                return view! {
                    <EmptyState title="Match not available" detail="You can only view matches you are part of."/>
                }
                .into_any();
            };
            let respond = can_respond(&user, &m);
            let feedback_type = can_leave_feedback(&user, &m).then(|| feedback_type_for(&user, &m)).flatten();
            let timeline = m
                .timeline()
                .into_iter()
                .map(|(label, at)| view! { <li><span class="timeline__label">{label}</span>" "{models::date_part(at).to_owned()}</li> })
                .collect::<Vec<_>>();
            view! {
                <header class="page__header">
                    <h1>{format!("Match #{}", m.id)}</h1>
                    <MatchStatusBadge status=m.status/>
                </header>
                <dl class="facts">
                    <dt>"Buddy"</dt>
                    <dd><a href=format!("/employees/{}", m.buddy_id)>{m.buddy_name()}</a></dd>
                    <dt>"Newcomer"</dt>
                    <dd><a href=format!("/employees/{}", m.newcomer_id)>{m.newcomer_name()}</a></dd>
                    {m.notes.clone().map(|n| view! { <dt>"Notes"</dt><dd>{n}</dd> })}
                    {m.rejection_reason.clone().map(|r| view! { <dt>"Rejection reason"</dt><dd>{r}</dd> })}
                </dl>
                {respond.then(|| view! { <MatchActions match_id=m.id on_changed=reload/> })}
                <section class="detail-section">
                    <h2>"Timeline"</h2>
                    <ol class="timeline">{timeline}</ol>
                </section>
                <CompatibilityBreakdown score=m.compatibility_score/>
                <MatchFeedback match_id=m.id user_id=user.id feedback_type=feedback_type/>
                {user.is_hr().then(|| view! { <AwardPointsForm buddy_id=m.buddy_id/> })}
            }
            .into_any()
        })
    }
}

#[component]
fn MatchFeedback(match_id: i64, user_id: i64, feedback_type: Option<models::FeedbackType>) -> impl IntoView {
    let feedback = RwSignal::new(Remote::<Vec<Feedback>>::default());
    let load = move || spawn_fetch(feedback, api::fetch_match_feedback(match_id));
    load();
    let retry = Callback::new(move |()| load());
    let on_submitted = Callback::new(move |saved: Feedback| feedback.update(|f| f.update_ready(|list| list.push(saved))));

    view! {
        <section class="detail-section">
            <h2>"Feedback"</h2>
            {move || remote_view(feedback.get(), retry, move |list| {
                let form = feedback_type.filter(|_| !has_submitted(&list, user_id)).map(|kind| {
                    view! { <FeedbackForm match_id=match_id submitted_by_id=user_id feedback_type=kind on_submitted=on_submitted/> }
                });
                view! {
                    <FeedbackList feedback=list/>
                    {form}
                }
            })}
        </section>
    }
}

#[component]
fn AwardPointsForm(buddy_id: i64) -> impl IntoView {
    let points = RwSignal::new(String::from("50"));
    let reason = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let failure = RwSignal::new(None::<String>);
    let awarded = RwSignal::new(None::<u32>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match award_request(buddy_id, &points.get_untracked(), &reason.get_untracked()) {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        failure.set(None);
        awarded.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::award_points(&request).await {
                Ok(()) => {
                    awarded.set(Some(request.points));
                    reason.set(String::new());
                }
                Err(e) => failure.set(Some(format!("Could not award points: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.for_field(field).map(|m| view! { <span class="form__error">{m.to_owned()}</span> }))
    };

    view! {
        <section class="detail-section">
            <h2>"Award points to the buddy"</h2>
            <form class="form form--inline" on:submit=on_submit>
                <label class="form__field form__field--inline">
                    <span>"Points"</span>
                    <input
                        class="input input--narrow"
                        type="number"
                        min="1"
                        prop:value=move || points.get()
                        on:input=move |ev| points.set(event_target_value(&ev))
                    />
                    {field_error("points")}
                </label>
                <label class="form__field form__field--inline">
                    <span>"Reason"</span>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                    {field_error("reason")}
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Award"</button>
            </form>
            {move || awarded.get().map(|n| view! { <p class="notice notice--success">{format!("Awarded {n} points.")}</p> })}
            {move || failure.get().map(|message| view! { <ErrorBanner message=message/> })}
        </section>
    }
}
