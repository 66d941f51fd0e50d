//! Match list: every match for HR, the user's own matches otherwise.

use leptos::prelude::*;
use models::{BuddyMatch, MatchStatus};

use crate::components::match_list::MatchList;
use crate::components::role_guard::RequireSession;
use crate::components::status::remote_view;
use crate::net::api;
use crate::state::matches::{filter_by_status, merge_unique, status_counts};
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::SessionState;

/// Matches visible to `user_id`, whichever side of the match they are on.
async fn fetch_own_matches(user_id: i64) -> Result<Vec<BuddyMatch>, models::ApiError> {
    let as_buddy = api::fetch_matches_for_buddy(user_id).await?;
    let as_newcomer = api::fetch_matches_for_newcomer(user_id).await?;
    Ok(merge_unique([as_buddy, as_newcomer]))
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    view! {
        <RequireSession>
            <MatchesView/>
        </RequireSession>
    }
}

#[component]
fn MatchesView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let matches = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let status = RwSignal::new(None::<MatchStatus>);
    let is_hr = session.with_untracked(SessionState::is_hr);

    let load = move || {
        if is_hr {
            spawn_fetch(matches, api::fetch_matches());
        } else if let Some(id) = session.with_untracked(SessionState::user_id) {
            spawn_fetch(matches, fetch_own_matches(id));
        }
    };
    load();
    let reload = Callback::new(move |()| load());

    view! {
        <div class="page matches-page">
            <header class="page__header">
                <h1>{if is_hr { "All matches" } else { "My matches" }}</h1>
                {is_hr.then(|| view! { <a class="btn btn--primary" href="/matching">"New match"</a> })}
            </header>
            {move || remote_view(matches.get(), reload, move |list| {
                let counts = status_counts(&list);
                let total = list.len();
                view! {
                    <div class="filters">
                        <select
                            class="input"
                            aria-label="Status"
                            prop:value=move || status.get().map(MatchStatus::label).unwrap_or_default()
                            on:change=move |ev| status.set(event_target_value(&ev).parse().ok())
                        >
                            <option value="">{format!("All statuses ({total})")}</option>
                            {counts
                                .into_iter()
                                .map(|(s, n)| view! { <option value=s.label()>{format!("{} ({n})", s.label())}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    {move || view! {
                        <MatchList
                            matches=filter_by_status(&list, status.get())
                            on_changed=reload
                            empty_title="No matches with this status"
                        />
                    }}
                }
            })}
        </div>
    }
}
