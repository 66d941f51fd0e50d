//! Single headline number for dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional_no_strip)] hint: Option<String>,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <span class="stat-card__value">{value}</span>
        <span class="stat-card__label">{label}</span>
        {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
    };
    match href {
        Some(href) => view! { <a class="stat-card stat-card--link" href=href>{body}</a> }.into_any(),
        None => view! { <div class="stat-card">{body}</div> }.into_any(),
    }
}
