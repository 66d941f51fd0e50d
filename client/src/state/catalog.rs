//! Buddy catalog filtering, sorting and facets.
//!
//! DESIGN
//! ======
//! The catalog loads every buddy profile once and filters locally. Unit and
//! location compare against effective attributes (override first, then the
//! employee's own value), which is what the cards display.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use models::{Availability, BuddyProfile};

use crate::util::query::{matches_all_terms, search_terms};

/// Catalog ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogSort {
    #[default]
    Name,
    /// Highest availability score first.
    Availability,
    /// Most free slots first.
    Capacity,
}

impl CatalogSort {
    pub const ALL: [Self; 3] = [Self::Name, Self::Availability, Self::Capacity];

    pub fn value(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Availability => "availability",
            Self::Capacity => "capacity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Availability => "Availability score",
            Self::Capacity => "Free capacity",
        }
    }

    /// Inverse of [`CatalogSort::value`]; unknown values fall back to name.
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == raw).unwrap_or_default()
    }
}

/// UI-local catalog filter state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub query: String,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
    pub accepting_only: bool,
    pub sort: CatalogSort,
}

impl CatalogFilter {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `profile` passes every active filter.
    pub fn matches(&self, profile: &BuddyProfile) -> bool {
        self.matches_terms(&search_terms(&self.query), profile)
    }

    fn matches_terms(&self, terms: &[String], profile: &BuddyProfile) -> bool {
        if self.accepting_only && !profile.can_accept_new_buddy {
            return false;
        }
        if self.availability.is_some_and(|a| a != profile.availability) {
            return false;
        }
        if let Some(unit) = &self.unit {
            if profile.effective_unit() != Some(unit.as_str()) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if profile.effective_location() != Some(location.as_str()) {
                return false;
            }
        }

        let name = profile.display_name();
        let title = profile.employee.as_ref().map_or("", |e| e.title.as_str());
        let haystacks = [name.as_str(), title, profile.bio.as_str()]
            .into_iter()
            .chain(profile.specialties.iter().map(String::as_str))
            .chain(profile.effective_tech_stack().iter().map(String::as_str));
        matches_all_terms(terms, haystacks)
    }

    /// Filtered and sorted copy of `profiles`.
    pub fn apply(&self, profiles: &[BuddyProfile]) -> Vec<BuddyProfile> {
        let terms = search_terms(&self.query);
        let mut out: Vec<BuddyProfile> = profiles
            .iter()
            .filter(|p| self.matches_terms(&terms, p))
            .cloned()
            .collect();
        out.sort_by(|a, b| compare(self.sort, a, b));
        out
    }
}

fn compare(sort: CatalogSort, a: &BuddyProfile, b: &BuddyProfile) -> Ordering {
    let by_name = || {
        a.display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase())
    };
    match sort {
        CatalogSort::Name => by_name(),
        CatalogSort::Availability => b
            .availability_score
            .total_cmp(&a.availability_score)
            .then_with(by_name),
        CatalogSort::Capacity => b.free_capacity().cmp(&a.free_capacity()).then_with(by_name),
    }
}

/// Distinct effective units and locations, sorted, for the filter dropdowns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facets {
    pub units: Vec<String>,
    pub locations: Vec<String>,
}

pub fn facets(profiles: &[BuddyProfile]) -> Facets {
    let units: BTreeSet<&str> = profiles.iter().filter_map(BuddyProfile::effective_unit).collect();
    let locations: BTreeSet<&str> = profiles.iter().filter_map(BuddyProfile::effective_location).collect();
    Facets {
        units: units.into_iter().map(str::to_owned).collect(),
        locations: locations.into_iter().map(str::to_owned).collect(),
    }
}
