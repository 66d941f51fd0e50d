//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders role-filtered links from [`nav_items`], the acting user, the
//! theme toggle and sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionState, is_active_link, nav_items};
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let links = move || {
        let path = location.pathname.get();
        session.with(|s| nav_items(s.user.as_ref()))
            .into_iter()
            .map(|item| {
                let active = is_active_link(item.href, &path);
                view! {
                    <a
                        class="nav-bar__link"
                        class:nav-bar__link--active=active
                        class:nav-bar__link--hr=item.hr_only
                        href=item.href
                        on:click=move |_| ui.update(|u| u.nav_open = false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let user_label = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("{} ({})", u.full_name(), u.role.label()))
        })
    };

    // Guarded pages redirect to the switcher once the session is empty.
    let on_sign_out = move |_| session.update(SessionState::sign_out);

    view! {
        <header class="nav-bar" class:nav-bar--open=move || ui.with(|u| u.nav_open)>
            <a class="nav-bar__brand" href="/">"Buddy Portal"</a>
            <button
                class="btn nav-bar__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>
            <nav class="nav-bar__links">{links}</nav>
            <span class="nav-bar__spacer"></span>
            <button
                class="btn nav-bar__theme"
                title=move || ui.with(UiState::theme_title)
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || ui.with(UiState::theme_icon)}
            </button>
            <Show when=move || session.with(SessionState::is_signed_in)>
                <span class="nav-bar__user">{user_label}</span>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
