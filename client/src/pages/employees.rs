//! Employee directory with search, scope filter and the HR create form.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;
use models::validation::{Validate, ValidationErrors, non_empty, split_tags};
use models::{CreateEmployeeRequest, Employee, EmployeeRole};

use crate::components::employee_card::EmployeeCard;
use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, ErrorBanner, remote_view};
use crate::net::api;
use crate::state::directory::{DirectoryFilter, DirectoryScope};
use crate::state::remote::{Remote, spawn_fetch};
use crate::state::session::SessionState;

/// Raw input of the create-employee form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub unit: String,
    pub team: String,
    pub location: String,
    pub start_date: String,
    pub hr: bool,
    pub is_buddy_guide: bool,
    pub is_newcomer: bool,
    pub tech_stack: String,
    pub interests: String,
}

impl EmployeeDraft {
    pub fn to_request(&self) -> Result<CreateEmployeeRequest, ValidationErrors> {
        let request = CreateEmployeeRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            title: self.title.trim().to_owned(),
            unit: self.unit.trim().to_owned(),
            team: non_empty(&self.team),
            location: self.location.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            role: if self.hr { EmployeeRole::Hr } else { EmployeeRole::Employee },
            is_buddy_guide: self.is_buddy_guide,
            is_newcomer: self.is_newcomer,
            tech_stack: split_tags(&self.tech_stack),
            interests: split_tags(&self.interests),
        };
        request.validate()?;
        Ok(request)
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = RwSignal::new(Remote::<Vec<Employee>>::default());
    let filter = RwSignal::new(DirectoryFilter::default());
    let show_create = RwSignal::new(false);

    let load = move || spawn_fetch(employees, api::fetch_employees());
    load();
    let retry = Callback::new(move |()| load());
    let on_created = Callback::new(move |created: Employee| {
        show_create.set(false);
        employees.update(|r| r.update_ready(|list| list.push(created)));
    });

    view! {
        <RequireSession>
            <div class="page employees-page">
                <header class="page__header">
                    <h1>"Employees"</h1>
                    <Show when=move || session.with(SessionState::is_hr)>
                        <button class="btn btn--primary" on:click=move |_| show_create.update(|v| *v = !*v)>
                            {move || if show_create.get() { "Close form" } else { "+ New employee" }}
                        </button>
                    </Show>
                </header>
                <Show when=move || show_create.get() && session.with(SessionState::is_hr)>
                    <CreateEmployeeForm on_created=on_created/>
                </Show>
                <div class="filters">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search name, unit, team, title or location"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                    />
                    <div class="segmented">
                        {DirectoryScope::ALL
                            .into_iter()
                            .map(|scope| view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || filter.with(|f| f.scope == scope)
                                    on:click=move |_| filter.update(|f| f.scope = scope)
                                >
                                    {scope.label()}
                                </button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                {move || remote_view(employees.get(), retry, move |list| {
                    let shown = filter.with(|f| f.apply(&list));
                    if shown.is_empty() {
                        return view! { <EmptyState title="No employees match these filters"/> }.into_any();
                    }
                    view! {
                        <p class="result-count">{format!("{} of {}", shown.len(), list.len())}</p>
                        <div class="card-grid">
                            {shown.into_iter().map(|e| view! { <EmployeeCard employee=e/> }).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                })}
            </div>
        </RequireSession>
    }
}

#[component]
fn CreateEmployeeForm(on_created: Callback<Employee>) -> impl IntoView {
    let draft = RwSignal::new(EmployeeDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = on_created;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(EmployeeDraft::to_request) {
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
            match api::create_employee(&request).await {
                Ok(created) => {
                    draft.set(EmployeeDraft::default());
                    on_created.run(created);
                }
                Err(e) => failure.set(Some(format!("Could not create employee: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="form create-employee-form" on:submit=on_submit>
            <h2>"New employee"</h2>
            <div class="form__grid">
                {text_field(draft, errors, "First name", "firstName", "text", |d| &d.first_name, |d, v| d.first_name = v)}
                {text_field(draft, errors, "Last name", "lastName", "text", |d| &d.last_name, |d, v| d.last_name = v)}
                {text_field(draft, errors, "Email", "email", "email", |d| &d.email, |d, v| d.email = v)}
                {text_field(draft, errors, "Title", "title", "text", |d| &d.title, |d, v| d.title = v)}
                {text_field(draft, errors, "Unit", "unit", "text", |d| &d.unit, |d, v| d.unit = v)}
                {text_field(draft, errors, "Team", "team", "text", |d| &d.team, |d, v| d.team = v)}
                {text_field(draft, errors, "Location", "location", "text", |d| &d.location, |d, v| d.location = v)}
                {text_field(draft, errors, "Start date", "startDate", "date", |d| &d.start_date, |d, v| d.start_date = v)}
                {text_field(draft, errors, "Tech stack", "techStack", "text", |d| &d.tech_stack, |d, v| d.tech_stack = v)}
                {text_field(draft, errors, "Interests", "interests", "text", |d| &d.interests, |d, v| d.interests = v)}
            </div>
            <div class="form__checks">
                {check_field(draft, "HR staff", |d| d.hr, |d, v| d.hr = v)}
                {check_field(draft, "Buddy guide", |d| d.is_buddy_guide, |d, v| d.is_buddy_guide = v)}
                {check_field(draft, "Newcomer", |d| d.is_newcomer, |d, v| d.is_newcomer = v)}
            </div>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Create employee" }}
            </button>
            {move || failure.get().map(|message| view! { <ErrorBanner message=message/> })}
        </form>
    }
}

fn text_field(
    draft: RwSignal<EmployeeDraft>,
    errors: RwSignal<ValidationErrors>,
    label: &'static str,
    field: &'static str,
    kind: &'static str,
    get: fn(&EmployeeDraft) -> &String,
    set: fn(&mut EmployeeDraft, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span>{label}</span>
            <input
                class="input"
                type=kind
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
            {move || errors.with(|e| e.for_field(field).map(|m| view! { <span class="form__error">{m.to_owned()}</span> }))}
        </label>
    }
}

fn check_field(
    draft: RwSignal<EmployeeDraft>,
    label: &'static str,
    get: fn(&EmployeeDraft) -> bool,
    set: fn(&mut EmployeeDraft, bool),
) -> impl IntoView {
    view! {
        <label class="form__check">
            <input
                type="checkbox"
                prop:checked=move || draft.with(get)
                on:change=move |ev| draft.update(|d| set(d, event_target_checked(&ev)))
            />
            <span>{label}</span>
        </label>
    }
}
