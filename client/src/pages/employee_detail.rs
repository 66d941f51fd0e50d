//! Employee detail: organizational record, buddy profile and matches.
//!
//! A buddy guide without a profile is an expected state. It renders an empty
//! state, plus the create form for the guide themself or HR.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::display::capacity_label;
use models::{BuddyMatch, BuddyProfile, Employee};

use crate::components::buddy_profile_form::BuddyProfileForm;
use crate::components::match_list::MatchList;
use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, remote_view};
use crate::components::tag_list::TagList;
use crate::net::api;
use crate::state::matches::merge_unique;
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::{SessionState, can_manage_profile};
use crate::util::query::parse_id;

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| parse_id(params.read().get("id").as_deref()));
    view! {
        <RequireSession>
            <div class="page employee-detail-page">
                <a class="back-link" href="/employees">"← Employees"</a>
                {move || match id.get() {
                    Some(id) => view! { <EmployeeDetail id=id/> }.into_any(),
                    None => view! { <EmptyState title="Employee not found"/> }.into_any(),
                }}
            </div>
        </RequireSession>
    }
}

#[component]
fn EmployeeDetail(id: i64) -> impl IntoView {
    let employee = RwSignal::new(Remote::<Employee>::default());
    let load = move || spawn_fetch(employee, api::fetch_employee(id));
    load();
    let retry = Callback::new(move |()| load());

    move || {
        remote_view(employee.get(), retry, |e| {
            let name = e.full_name();
            let guide = e.is_buddy_guide;
            let org = [Some(e.unit.clone()), e.team.clone()]
                .into_iter()
                .flatten()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" · ");
            let started = e.start_date_display().unwrap_or("—").to_owned();
            view! {
                <header class="page__header">
                    <span class="avatar avatar--large" aria-hidden="true">{e.initials()}</span>
                    <div>
                        <h1>{name}</h1>
                        <p class="page__subtitle">{e.title.clone()}" · "{e.role.label()}</p>
                    </div>
                </header>
                <dl class="facts">
                    <dt>"Email"</dt>
                    <dd><a href=format!("mailto:{}", e.email)>{e.email.clone()}</a></dd>
                    <dt>"Organization"</dt>
                    <dd>{org}</dd>
                    <dt>"Location"</dt>
                    <dd>{e.location.clone()}</dd>
                    <dt>"Start date"</dt>
                    <dd>{started}</dd>
                    <dt>"Tech stack"</dt>
                    <dd><TagList tags=e.tech_stack.clone()/></dd>
                    <dt>"Interests"</dt>
                    <dd><TagList tags=e.interests.clone()/></dd>
                </dl>
                {guide.then(|| view! { <ProfileSection employee=e.clone()/> })}
                <EmployeeMatches employee_id=e.id/>
            }
        })
    }
}

#[component]
fn ProfileSection(employee: Employee) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = RwSignal::new(Remote::<Option<BuddyProfile>>::default());
    let editing = RwSignal::new(false);
    let employee_id = employee.id;

    let load = move || spawn_fetch(profile, api::fetch_buddy_profile_for_employee(employee_id));
    load();
    let retry = Callback::new(move |()| load());
    let on_saved = Callback::new(move |saved: BuddyProfile| {
        editing.set(false);
        profile.set(Remote::Ready(Some(saved)));
    });
    let on_cancel = Callback::new(move |()| editing.set(false));
    let can_manage = Memo::new(move |_| {
        session.with(|s| s.user.as_ref().is_some_and(|u| can_manage_profile(u, &employee)))
    });

    view! {
        <section class="detail-section">
            <h2>"Buddy profile"</h2>
            {move || remote_view(profile.get(), retry, move |p| {
                let manage = can_manage.get();
                if editing.get() && manage {
                    return view! {
                        <BuddyProfileForm employee_id=employee_id existing=p.clone() on_saved=on_saved on_cancel=on_cancel/>
                    }
                    .into_any();
                }
                match p {
                    Some(p) => {
                        let href = format!("/buddies/{}", p.id);
                        view! {
                            <p class="profile-bio">{p.bio.clone()}</p>
                            <dl class="facts">
                                <dt>"Availability"</dt>
                                <dd>{p.availability.label()}</dd>
                                <dt>"Capacity"</dt>
                                <dd>{capacity_label(&p)}{if p.can_accept_new_buddy { " · accepting" } else { " · full" }}</dd>
                                <dt>"Specialties"</dt>
                                <dd><TagList tags=p.specialties.clone()/></dd>
                            </dl>
                            <div class="form__actions">
                                <a class="btn" href=href>"Open in catalog"</a>
                                {manage.then(|| view! {
                                    <button class="btn btn--primary" on:click=move |_| editing.set(true)>"Edit profile"</button>
                                })}
                            </div>
                        }
                        .into_any()
                    }
                    None if manage => view! {
                        <EmptyState title="No buddy profile yet" detail="Fill in the form to start receiving newcomers."/>
                        <BuddyProfileForm employee_id=employee_id on_saved=on_saved/>
                    }
                    .into_any(),
                    None => view! { <EmptyState title="No buddy profile yet"/> }.into_any(),
                }
            })}
        </section>
    }
}

#[component]
fn EmployeeMatches(employee_id: i64) -> impl IntoView {
    let as_buddy = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let as_newcomer = RwSignal::new(Remote::<Vec<BuddyMatch>>::default());
    let load = move || {
        spawn_fetch(as_buddy, api::fetch_matches_for_buddy(employee_id));
        spawn_fetch(as_newcomer, api::fetch_matches_for_newcomer(employee_id));
    };
    load();
    let reload = Callback::new(move |()| load());

    let merged = move || match (as_buddy.get(), as_newcomer.get()) {
        (Remote::Ready(a), Remote::Ready(b)) => Remote::Ready(merge_unique([a, b])),
        (Remote::Failed(e), _) | (_, Remote::Failed(e)) => Remote::Failed(e),
        _ => Remote::Loading,
    };

    view! {
        <section class="detail-section">
            <h2>"Matches"</h2>
            {move || remote_view(merged(), reload, move |list| view! {
                <MatchList matches=list on_changed=reload/>
            })}
        </section>
    }
}
