//! Messages: conversation list and a placeholder for live chat.

use leptos::prelude::*;
use models::{ConversationSummary, date_part};

use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, remote_view};
use crate::net::api;
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::SessionState;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <RequireSession>
            <div class="page messages-page">
                <header class="page__header">
                    <h1>"Messages"</h1>
                </header>
                <EmptyState
                    title="Real-time messaging is coming soon"
                    detail="Until then, reach your buddy through the email on their profile."
                />
                <Conversations/>
            </div>
        </RequireSession>
    }
}

#[component]
fn Conversations() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let conversations = RwSignal::new(Remote::<Vec<ConversationSummary>>::default());
    let load = move || {
        if let Some(id) = session.with_untracked(SessionState::user_id) {
            spawn_fetch(conversations, api::fetch_conversations(id));
        }
    };
    load();
    let retry = Callback::new(move |()| load());

    view! {
        <section class="detail-section">
            <h2>"Conversations"</h2>
            {move || remote_view(conversations.get(), retry, |list| {
                if list.is_empty() {
                    return view! { <EmptyState title="No conversations yet"/> }.into_any();
                }
                view! {
                    <ul class="conversation-list">
                        {list
                            .into_iter()
                            .map(|c| {
                                let when = c.last_message_at.as_deref().map(date_part).unwrap_or_default().to_owned();
                                let unread = (c.unread_count > 0).then(|| view! {
                                    <span class="conversation-list__unread">{c.unread_count}</span>
                                });
                                view! {
                                    <li class="conversation-list__item">
                                        <a href=format!("/matches/{}", c.match_id)>{c.other_participant_name.clone()}</a>
                                        {unread}
                                        <span class="conversation-list__date">{when}</span>
                                        {c.last_message.map(|m| view! { <p class="conversation-list__preview">{m}</p> })}
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
