//! Loading indicator, empty state and error banner.
//!
//! DESIGN
//! ======
//! `remote_view` is the single place that maps a [`Remote`] onto those three
//! presentations, so every page fails and retries the same way.

use leptos::prelude::*;

use crate::state::remote::Remote;

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

/// Expected absence of data, such as a buddy guide without a profile yet.
#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(optional, into)] detail: Option<String>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">{title}</p>
            {detail.map(|d| view! { <p class="empty-state__detail">{d}</p> })}
        </div>
    }
}

/// Failed request with an optional manual retry.
#[component]
pub fn ErrorBanner(#[prop(into)] message: String, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__message">{message}</span>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}

/// Render a [`Remote`] as a spinner, an error banner with retry, or `ready(value)`.
pub fn remote_view<T, V>(remote: Remote<T>, on_retry: Callback<()>, ready: impl FnOnce(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match remote {
        Remote::Idle | Remote::Loading => view! { <Loading/> }.into_any(),
        Remote::Failed(message) => view! { <ErrorBanner message=message on_retry=on_retry/> }.into_any(),
        Remote::Ready(value) => ready(value).into_view().into_any(),
    }
}
