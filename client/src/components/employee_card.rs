//! Directory card linking to an employee's detail page.

use leptos::prelude::*;
use models::Employee;

#[component]
pub fn EmployeeCard(employee: Employee) -> impl IntoView {
    let href = format!("/employees/{}", employee.id);
    let name = employee.full_name();
    let initials = employee.initials();
    let org = match employee.team.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(team) => format!("{} · {team}", employee.unit),
        None => employee.unit.clone(),
    };
    let started = employee.start_date_display().map(|d| format!("Started {d}"));

    view! {
        <a class="employee-card" href=href>
            <span class="avatar" aria-hidden="true">{initials}</span>
            <span class="employee-card__body">
                <span class="employee-card__name">{name}</span>
                <span class="employee-card__title">{employee.title.clone()}</span>
                <span class="employee-card__meta">{org}" · "{employee.location.clone()}</span>
                {started.map(|s| view! { <span class="employee-card__meta">{s}</span> })}
            </span>
            <span class="employee-card__flags">
                {employee.is_hr().then(|| view! { <span class="chip chip--hr">"HR"</span> })}
                {employee.is_buddy_guide.then(|| view! { <span class="chip chip--buddy">"Buddy guide"</span> })}
                {employee.is_newcomer.then(|| view! { <span class="chip chip--newcomer">"Newcomer"</span> })}
            </span>
        </a>
    }
}
