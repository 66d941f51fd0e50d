//! Accept/reject controls for a pending match.
//!
//! The server decides the resulting state. After either call succeeds the
//! parent is told to reload so it shows whatever the backend now reports.

use leptos::prelude::*;
use models::RejectMatchRequest;

use crate::components::status::ErrorBanner;

#[component]
pub fn MatchActions(match_id: i64, on_changed: Callback<()>) -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let rejecting = RwSignal::new(false);
    let reason = RwSignal::new(String::new());
    #[cfg(not(feature = "hydrate"))]
    let _ = (match_id, on_changed);

    let on_accept = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::accept_match(match_id).await {
                Ok(_) => on_changed.run(()),
                Err(e) => error.set(Some(format!("Accept failed: {e}"))),
            }
            busy.set(false);
        });
    };

    let on_reject = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = RejectMatchRequest {
            reason: models::validation::non_empty(&reason.get_untracked()),
        };
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reject_match(match_id, &request).await {
                Ok(_) => {
                    rejecting.set(false);
                    reason.set(String::new());
                    on_changed.run(());
                }
                Err(e) => error.set(Some(format!("Reject failed: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="match-actions">
            <Show
                when=move || rejecting.get()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_accept>
                            "Accept"
                        </button>
                        <button class="btn btn--danger" disabled=move || busy.get() on:click=move |_| rejecting.set(true)>
                            "Reject"
                        </button>
                    }
                }
            >
                <form class="match-actions__reject" on:submit=on_reject>
                    <input
                        class="input"
                        type="text"
                        placeholder="Reason (optional)"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                    <button class="btn btn--danger" type="submit" disabled=move || busy.get()>
                        "Confirm reject"
                    </button>
                    <button class="btn" type="button" on:click=move |_| rejecting.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>
            {move || error.get().map(|message| view! { <ErrorBanner message=message/> })}
        </div>
    }
}
