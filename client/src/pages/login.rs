//! Demo-mode user switcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication. The page lists every employee and the picked
//! one becomes the session user, after which the app navigates home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::Employee;

use crate::components::status::remote_view;
use crate::net::api;
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::SessionState;
use crate::util::query::{matches_all_terms, search_terms};

/// HR first, then buddy guides, newcomers, everyone else; by name within a group.
pub fn switcher_order(employees: &[Employee], query: &str) -> Vec<Employee> {
    let terms = search_terms(query);
    let mut out: Vec<Employee> = employees
        .iter()
        .filter(|e| matches_all_terms(&terms, [e.first_name.as_str(), e.last_name.as_str(), e.title.as_str()]))
        .cloned()
        .collect();
    out.sort_by_key(|e| {
        let group = if e.is_hr() {
            0
        } else if e.is_buddy_guide {
            1
        } else if e.is_newcomer {
            2
        } else {
            3
        };
        (group, e.full_name().to_lowercase())
    });
    out
}

/// Short role summary shown next to each name.
pub fn role_summary(employee: &Employee) -> String {
    let mut parts = vec![employee.role.label()];
    if employee.is_buddy_guide {
        parts.push("Buddy guide");
    }
    if employee.is_newcomer {
        parts.push("Newcomer");
    }
    parts.join(" · ")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let employees = RwSignal::new(Remote::<Vec<Employee>>::default());
    let query = RwSignal::new(String::new());

    let load = move || spawn_fetch(employees, api::fetch_employees());
    load();
    let retry = Callback::new(move |()| load());

    let picked = RwSignal::new(false);
    let choose = Callback::new(move |employee: Employee| {
        session.update(|s| s.sign_in(employee));
        picked.set(true);
    });
    Effect::new(move || {
        if picked.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Buddy Portal"</h1>
                <p class="login-card__subtitle">"Demo mode: choose who to act as"</p>
                <Show when=move || session.with(SessionState::is_signed_in)>
                    <p class="login-message">
                        {move || session.with(|s| s.user.as_ref().map(|u| format!("Currently acting as {}", u.full_name())))}
                    </p>
                </Show>
                <input
                    class="input login-input"
                    type="search"
                    placeholder="Filter by name or title"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                {move || {
                    remote_view(employees.get(), retry, |list| {
                        let ordered = switcher_order(&list, &query.get());
                        if ordered.is_empty() {
                            return view! { <p class="login-message">"No employees match."</p> }.into_any();
                        }
                        view! {
                            <ul class="user-switcher">
                                {ordered
                                    .into_iter()
                                    .map(|e| {
                                        let summary = role_summary(&e);
                                        let name = e.full_name();
                                        let initials = e.initials();
                                        let title = e.title.clone();
                                        view! {
                                            <li>
                                                <button class="user-switcher__item" on:click=move |_| choose.run(e.clone())>
                                                    <span class="avatar" aria-hidden="true">{initials}</span>
                                                    <span class="user-switcher__name">{name}</span>
                                                    <span class="user-switcher__title">{title}</span>
                                                    <span class="user-switcher__role">{summary}</span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    })
                }}
            </div>
        </div>
    }
}
