//! Feedback list, rating summary and submission form for a match.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;
use models::display::format_rating;
use models::validation::{MAX_COMMENT_CHARS, Validate, ValidationErrors, non_empty};
use models::{Feedback, FeedbackRequest, FeedbackStats, FeedbackType, date_part};

use crate::components::status::{EmptyState, ErrorBanner};

/// Validated request from raw form input.
pub fn feedback_request(
    match_id: i64,
    submitted_by_id: i64,
    feedback_type: FeedbackType,
    rating: u8,
    comment: &str,
) -> Result<FeedbackRequest, ValidationErrors> {
    let request = FeedbackRequest {
        match_id,
        submitted_by_id,
        rating,
        comment: non_empty(comment),
        feedback_type,
    };
    request.validate()?;
    Ok(request)
}

/// `★★★☆☆` for a 1-5 rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Share of `count` in `total` as a whole percent, 0 for an empty total.
pub fn share_percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (u64::from(count) * 100 / u64::from(total)).try_into().unwrap_or(100)
}

#[component]
pub fn FeedbackList(feedback: Vec<Feedback>) -> impl IntoView {
    if feedback.is_empty() {
        return view! { <EmptyState title="No feedback yet"/> }.into_any();
    }
    view! {
        <ul class="feedback-list">
            {feedback
                .into_iter()
                .map(|f| {
                    let author = f
                        .submitted_by_name
                        .clone()
                        .unwrap_or_else(|| format!("Employee #{}", f.submitted_by_id));
                    let when = f.created_at.as_deref().map(date_part).unwrap_or_default().to_owned();
                    view! {
                        <li class="feedback-list__item">
                            <span class="feedback-list__stars" title=format!("{} / 5", f.rating)>{stars(f.rating)}</span>
                            <span class="feedback-list__type">{f.feedback_type.label()}</span>
                            <span class="feedback-list__author">{author}</span>
                            <span class="feedback-list__date">{when}</span>
                            {f.comment.map(|c| view! { <p class="feedback-list__comment">{c}</p> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// Average rating plus a 5-to-1 distribution.
#[component]
pub fn FeedbackSummary(stats: FeedbackStats) -> impl IntoView {
    let total = stats.total_feedback;
    let rows = (1..=5u8)
        .rev()
        .map(|star| {
            let count = stats.rating_distribution.get(&star).copied().unwrap_or(0);
            let pct = share_percent(count, total);
            view! {
                <tr>
                    <th scope="row">{format!("{star} ★")}</th>
                    <td class="breakdown__bar">
                        <span class="bar"><span class="bar__fill" style=format!("width: {pct}%")></span></span>
                    </td>
                    <td>{count}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <section class="feedback-summary">
            <p class="feedback-summary__average">
                {format_rating(stats.average_rating)}
                <span class="feedback-summary__count">{format!(" from {total} reviews")}</span>
            </p>
            <table class="feedback-summary__table">
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
pub fn FeedbackForm(
    match_id: i64,
    submitted_by_id: i64,
    feedback_type: FeedbackType,
    on_submitted: Callback<Feedback>,
) -> impl IntoView {
    let rating = RwSignal::new(5u8);
    let comment = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = on_submitted;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match feedback_request(
            match_id,
            submitted_by_id,
            feedback_type,
            rating.get_untracked(),
            &comment.get_untracked(),
        ) {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        failure.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_feedback(&request).await {
                Ok(saved) => {
                    comment.set(String::new());
                    rating.set(5);
                    on_submitted.run(saved);
                }
                Err(e) => failure.set(Some(format!("Could not submit feedback: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="form feedback-form" on:submit=on_submit>
            <h3>{format!("Leave feedback ({})", feedback_type.label())}</h3>
            <label class="form__field">
                <span>"Rating"</span>
                <select
                    class="input"
                    prop:value=move || rating.get().to_string()
                    on:change=move |ev| rating.set(event_target_value(&ev).parse().unwrap_or(5))
                >
                    {(1..=5u8)
                        .rev()
                        .map(|r| view! { <option value=r.to_string()>{format!("{} ({r})", stars(r))}</option> })
                        .collect::<Vec<_>>()}
                </select>
                {move || errors.with(|e| e.for_field("rating").map(|m| view! { <span class="form__error">{m.to_owned()}</span> }))}
            </label>
            <label class="form__field">
                <span>"Comment"</span>
                <textarea
                    class="input"
                    rows="4"
                    maxlength=MAX_COMMENT_CHARS.to_string()
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <span class="form__hint">
                    {move || format!("{} / {MAX_COMMENT_CHARS}", comment.with(|c| c.chars().count()))}
                </span>
                {move || errors.with(|e| e.for_field("comment").map(|m| view! { <span class="form__error">{m.to_owned()}</span> }))}
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Submitting..." } else { "Submit feedback" }}
            </button>
            {move || failure.get().map(|message| view! { <ErrorBanner message=message/> })}
        </form>
    }
}
