//! Catalog card for a buddy profile.
//!
//! Shows effective attributes (override first, employee value otherwise) and
//! the server's capacity verdict.

use leptos::prelude::*;
use models::BuddyProfile;
use models::display::capacity_label;

use crate::components::tag_list::TagList;

#[component]
pub fn BuddyCard(profile: BuddyProfile) -> impl IntoView {
    let href = format!("/buddies/{}", profile.id);
    let name = profile.display_name();
    let title = profile.employee.as_ref().map(|e| e.title.clone()).unwrap_or_default();
    let place = [profile.effective_unit(), profile.effective_location()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let availability = profile.availability;
    let capacity = capacity_label(&profile);
    let accepting = profile.can_accept_new_buddy;
    let tech = profile.effective_tech_stack().to_vec();
    let specialties = (!profile.specialties.is_empty()).then(|| profile.specialties.join(", "));

    view! {
        <a class="buddy-card" href=href>
            <header class="buddy-card__header">
                <span class="buddy-card__name">{name}</span>
                <span class=format!(
                    "chip chip--availability chip--{}",
                    availability.label().to_ascii_lowercase(),
                )>{availability.label()}</span>
            </header>
            <span class="buddy-card__title">{title}</span>
            <span class="buddy-card__place">{place}</span>
            <span class="buddy-card__capacity" class:buddy-card__capacity--full=!accepting>
                {capacity}
                {if accepting { " · accepting" } else { " · full" }}
            </span>
            <TagList tags=tech/>
            {specialties.map(|s| view! { <p class="buddy-card__specialties">{s}</p> })}
        </a>
    }
}
