//! Tabular match listing with inline accept/reject for eligible rows.

use leptos::prelude::*;
use models::BuddyMatch;

use crate::components::match_actions::MatchActions;
use crate::components::match_status_badge::{MatchStatusBadge, ScoreBadge};
use crate::components::status::EmptyState;
use crate::state::session::{SessionState, can_respond};

#[component]
pub fn MatchList(
    matches: Vec<BuddyMatch>,
    /// Enables accept/reject on rows the current user may respond to.
    #[prop(optional)]
    on_changed: Option<Callback<()>>,
    #[prop(optional, into)] empty_title: Option<String>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    if matches.is_empty() {
        let title = empty_title.unwrap_or_else(|| "No matches".to_owned());
        return view! { <EmptyState title=title/> }.into_any();
    }

    let user = session.get_untracked().user;
    let rows = matches
        .into_iter()
        .map(|m| {
            let actions = match (on_changed, user.as_ref()) {
                (Some(cb), Some(user)) if can_respond(user, &m) => {
                    Some(view! { <MatchActions match_id=m.id on_changed=cb/> })
                }
                _ => None,
            };
            let created = m.created_at.as_deref().map(models::date_part).unwrap_or("—").to_owned();
            view! {
                <tr>
                    <td><a href=format!("/matches/{}", m.id)>{format!("#{}", m.id)}</a></td>
                    <td><a href=format!("/employees/{}", m.buddy_id)>{m.buddy_name()}</a></td>
                    <td><a href=format!("/employees/{}", m.newcomer_id)>{m.newcomer_name()}</a></td>
                    <td><MatchStatusBadge status=m.status/></td>
                    <td><ScoreBadge score=m.compatibility_score/></td>
                    <td>{created}</td>
                    <td>{actions}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="table match-list">
            <thead>
                <tr>
                    <th>"Match"</th>
                    <th>"Buddy"</th>
                    <th>"Newcomer"</th>
                    <th>"Status"</th>
                    <th>"Score"</th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
