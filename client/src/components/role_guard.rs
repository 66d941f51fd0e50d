//! Route guards for the demo session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in one of these. Without a selected user the
//! guard redirects to `/login`; HR-only pages show a notice to everyone else
//! instead of rendering.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    SignedOut,
    Denied,
    Granted,
}

fn access(session: &SessionState, hr_only: bool) -> Access {
    if !session.is_signed_in() {
        Access::SignedOut
    } else if hr_only && !session.is_hr() {
        Access::Denied
    } else {
        Access::Granted
    }
}

fn guard(hr_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.with(SessionState::is_signed_in) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let state = Memo::new(move |_| session.with(|s| access(s, hr_only)));
    move || match state.get() {
        Access::SignedOut => view! { <p class="page-message">"Redirecting to login..."</p> }.into_any(),
        Access::Denied => view! {
            <div class="notice notice--warning">
                <h2>"HR only"</h2>
                <p>"This page is available to HR staff. Switch to an HR user to continue."</p>
            </div>
        }
        .into_any(),
        Access::Granted => children().into_any(),
    }
}

/// Render children only for a selected user.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    guard(false, children)
}

/// Render children only for HR users.
#[component]
pub fn RequireHr(children: ChildrenFn) -> impl IntoView {
    guard(true, children)
}
