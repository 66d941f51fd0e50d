use leptos::prelude::*;

/// Inline chips for tech stack, interests and specialties.
#[component]
pub fn TagList(tags: Vec<String>, #[prop(optional)] highlight: Vec<String>) -> impl IntoView {
    if tags.is_empty() {
        return view! { <span class="tag-list tag-list--empty">"None listed"</span> }.into_any();
    }
    view! {
        <ul class="tag-list">
            {tags
                .into_iter()
                .map(|tag| {
                    let shared = highlight.iter().any(|h| h.eq_ignore_ascii_case(&tag));
                    view! { <li class="tag" class:tag--shared=shared>{tag}</li> }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
