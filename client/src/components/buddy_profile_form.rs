//! Create or edit form for a buddy profile.
//!
//! DESIGN
//! ======
//! Inputs are held as raw strings in a [`ProfileDraft`] so list fields can be
//! typed comma-separated. Conversion to a request validates and normalizes
//! in one place; the component only wires inputs and the save call.

#[cfg(test)]
#[path = "buddy_profile_form_test.rs"]
mod buddy_profile_form_test;

use leptos::prelude::*;
use models::validation::{MAX_ACTIVE_BUDDIES_RANGE, Validate, ValidationErrors, join_tags, non_empty, split_tags};
use models::{Availability, BuddyProfile, BuddyProfileRequest};

use crate::components::status::ErrorBanner;

/// Raw form input.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub bio: String,
    pub specialties: String,
    pub availability: Availability,
    pub max_active_buddies: String,
    pub location_override: String,
    pub unit_override: String,
    pub tech_stack_override: String,
    pub interests_override: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::from_request(&BuddyProfileRequest::default())
    }
}

impl ProfileDraft {
    fn from_request(request: &BuddyProfileRequest) -> Self {
        Self {
            bio: request.bio.clone(),
            specialties: join_tags(&request.specialties),
            availability: request.availability,
            max_active_buddies: request.max_active_buddies.to_string(),
            location_override: request.location_override.clone().unwrap_or_default(),
            unit_override: request.unit_override.clone().unwrap_or_default(),
            tech_stack_override: request.tech_stack_override.as_deref().map(join_tags).unwrap_or_default(),
            interests_override: request.interests_override.as_deref().map(join_tags).unwrap_or_default(),
        }
    }

    pub fn from_profile(profile: &BuddyProfile) -> Self {
        Self::from_request(&BuddyProfileRequest::from(profile))
    }

    /// Normalized, validated request. Blank overrides are omitted.
    pub fn to_request(&self) -> Result<BuddyProfileRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let max_active_buddies = match self.max_active_buddies.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                errors.push("maxActiveBuddies", "Max active buddies must be a whole number");
                0
            }
        };
        let request = BuddyProfileRequest {
            bio: self.bio.trim().to_owned(),
            specialties: split_tags(&self.specialties),
            availability: self.availability,
            max_active_buddies,
            location_override: non_empty(&self.location_override),
            unit_override: non_empty(&self.unit_override),
            tech_stack_override: Some(split_tags(&self.tech_stack_override)).filter(|t| !t.is_empty()),
            interests_override: Some(split_tags(&self.interests_override)).filter(|t| !t.is_empty()),
        };
        if let Err(invalid) = request.validate() {
            for e in invalid.errors {
                if errors.for_field(e.field).is_none() {
                    errors.errors.push(e);
                }
            }
        }
        if errors.is_empty() { Ok(request) } else { Err(errors) }
    }
}

/// Edits `existing` via `PUT /buddies/{id}`, or creates a profile for
/// `employee_id` via `POST /employees/{id}/buddy-profile`.
#[component]
pub fn BuddyProfileForm(
    employee_id: i64,
    #[prop(default = None)] existing: Option<BuddyProfile>,
    on_saved: Callback<BuddyProfile>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let existing_id = existing.as_ref().map(|p| p.id);
    let draft = RwSignal::new(existing.as_ref().map(ProfileDraft::from_profile).unwrap_or_default());
    let errors = RwSignal::new(ValidationErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = (employee_id, on_saved);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(ProfileDraft::to_request) {
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
            let result = match existing_id {
                Some(id) => crate::net::api::update_buddy_profile(id, &request).await,
                None => crate::net::api::create_employee_buddy_profile(employee_id, &request).await,
            };
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => failure.set(Some(format!("Could not save profile: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.for_field(field)
                    .map(|m| view! { <span class="form__error">{m.to_owned()}</span> })
            })
        }
    };

    view! {
        <form class="form buddy-profile-form" on:submit=on_submit>
            <h3>{if existing_id.is_some() { "Edit buddy profile" } else { "Create buddy profile" }}</h3>
            <label class="form__field">
                <span>"Bio"</span>
                <textarea
                    class="input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.bio.clone())
                    on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                ></textarea>
                {field_error("bio")}
            </label>
            {text_field(draft, "Specialties", "Onboarding, Kubernetes", |d| &d.specialties, |d, v| d.specialties = v)}
            <label class="form__field">
                <span>"Availability"</span>
                <select
                    class="input"
                    prop:value=move || draft.with(|d| d.availability.label().to_owned())
                    on:change=move |ev| {
                        if let Ok(a) = event_target_value(&ev).parse::<Availability>() {
                            draft.update(|d| d.availability = a);
                        }
                    }
                >
                    {Availability::ALL
                        .into_iter()
                        .map(|a| view! { <option value=a.label()>{a.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__field">
                <span>"Max active buddies"</span>
                <input
                    class="input"
                    type="number"
                    min=MAX_ACTIVE_BUDDIES_RANGE.start().to_string()
                    max=MAX_ACTIVE_BUDDIES_RANGE.end().to_string()
                    prop:value=move || draft.with(|d| d.max_active_buddies.clone())
                    on:input=move |ev| draft.update(|d| d.max_active_buddies = event_target_value(&ev))
                />
                {field_error("maxActiveBuddies")}
            </label>
            <fieldset class="form__group">
                <legend>"Overrides (leave blank to use the employee record)"</legend>
                {text_field(draft, "Location", "", |d| &d.location_override, |d, v| d.location_override = v)}
                {text_field(draft, "Unit", "", |d| &d.unit_override, |d, v| d.unit_override = v)}
                {text_field(draft, "Tech stack", "Rust, TypeScript", |d| &d.tech_stack_override, |d, v| d.tech_stack_override = v)}
                {text_field(draft, "Interests", "Climbing, Chess", |d| &d.interests_override, |d, v| d.interests_override = v)}
            </fieldset>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save profile" }}
                </button>
                {on_cancel.map(|cancel| view! {
                    <button class="btn" type="button" on:click=move |_| cancel.run(())>"Cancel"</button>
                })}
            </div>
            {move || failure.get().map(|message| view! { <ErrorBanner message=message/> })}
        </form>
    }
}

fn text_field(
    draft: RwSignal<ProfileDraft>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&ProfileDraft) -> &String,
    set: fn(&mut ProfileDraft, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span>{label}</span>
            <input
                class="input"
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}
