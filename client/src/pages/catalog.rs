//! Buddy catalog with free-text search, facet filters and sorting.

use leptos::prelude::*;
use models::{Availability, BuddyProfile};

use crate::components::buddy_card::BuddyCard;
use crate::components::role_guard::RequireSession;
use crate::components::status::{EmptyState, remote_view};
use crate::net::api;
use crate::state::catalog::{CatalogFilter, CatalogSort, facets};
use crate::state::remote::{Remote, spawn_fetch};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let profiles = RwSignal::new(Remote::<Vec<BuddyProfile>>::default());
    let filter = RwSignal::new(CatalogFilter::default());

    let load = move || spawn_fetch(profiles, api::fetch_buddy_profiles());
    load();
    let retry = Callback::new(move |()| load());

    let facet_lists = Memo::new(move |_| profiles.with(|p| p.ready().map(|list| facets(list)).unwrap_or_default()));

    view! {
        <RequireSession>
            <div class="page catalog-page">
                <header class="page__header">
                    <h1>"Buddy catalog"</h1>
                </header>
                <div class="filters">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search name, title, bio, specialties or tech"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                    />
                    <select
                        class="input"
                        aria-label="Unit"
                        prop:value=move || filter.with(|f| f.unit.clone().unwrap_or_default())
                        on:change=move |ev| filter.update(|f| f.unit = models::validation::non_empty(&event_target_value(&ev)))
                    >
                        <option value="">"All units"</option>
                        {move || facet_lists.with(|f| f.units.clone())
                            .into_iter()
                            .map(|u| view! { <option value=u.clone()>{u.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="input"
                        aria-label="Location"
                        prop:value=move || filter.with(|f| f.location.clone().unwrap_or_default())
                        on:change=move |ev| filter.update(|f| f.location = models::validation::non_empty(&event_target_value(&ev)))
                    >
                        <option value="">"All locations"</option>
                        {move || facet_lists.with(|f| f.locations.clone())
                            .into_iter()
                            .map(|l| view! { <option value=l.clone()>{l.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="input"
                        aria-label="Availability"
                        prop:value=move || filter.with(|f| f.availability.map(Availability::label).unwrap_or_default())
                        on:change=move |ev| filter.update(|f| f.availability = event_target_value(&ev).parse().ok())
                    >
                        <option value="">"Any availability"</option>
                        {Availability::ALL
                            .into_iter()
                            .map(|a| view! { <option value=a.label()>{a.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || filter.with(|f| f.accepting_only)
                            on:change=move |ev| filter.update(|f| f.accepting_only = event_target_checked(&ev))
                        />
                        <span>"Accepting new buddies"</span>
                    </label>
                    <select
                        class="input"
                        aria-label="Sort by"
                        prop:value=move || filter.with(|f| f.sort.value())
                        on:change=move |ev| filter.update(|f| f.sort = CatalogSort::from_value(&event_target_value(&ev)))
                    >
                        {CatalogSort::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.value()>{format!("Sort: {}", s.label())}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || !filter.with(CatalogFilter::is_default)>
                        <button class="btn" on:click=move |_| filter.set(CatalogFilter::default())>"Clear"</button>
                    </Show>
                </div>
                {move || remote_view(profiles.get(), retry, move |list| {
                    let shown = filter.with(|f| f.apply(&list));
                    if shown.is_empty() {
                        return view! {
                            <EmptyState title="No buddies match these filters" detail="Try clearing a filter."/>
                        }
                        .into_any();
                    }
                    view! {
                        <p class="result-count">{format!("{} of {} buddies", shown.len(), list.len())}</p>
                        <div class="card-grid">
                            {shown.into_iter().map(|p| view! { <BuddyCard profile=p/> }).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                })}
            </div>
        </RequireSession>
    }
}
