use super::*;
use models::{Employee, EmployeeRole};

fn profile(id: i64, first: &str, unit: &str, location: &str) -> BuddyProfile {
    BuddyProfile {
        id,
        employee_id: id + 100,
        employee: Some(Employee {
            id: id + 100,
            first_name: first.to_owned(),
            last_name: "Tester".to_owned(),
            email: String::new(),
            title: "Engineer".to_owned(),
            unit: unit.to_owned(),
            team: None,
            location: location.to_owned(),
            start_date: None,
            role: EmployeeRole::Employee,
            tech_stack: vec!["Rust".to_owned()],
            interests: Vec::new(),
            is_buddy_guide: true,
            is_newcomer: false,
        }),
        bio: String::new(),
        specialties: Vec::new(),
        location_override: None,
        unit_override: None,
        tech_stack_override: None,
        interests_override: None,
        availability: Availability::Available,
        max_active_buddies: 3,
        current_active_buddies: 0,
        can_accept_new_buddy: true,
        availability_score: 0.5,
    }
}

fn sample() -> Vec<BuddyProfile> {
    let mut carol = profile(3, "Carol", "Sales", "Lisbon");
    carol.availability = Availability::Limited;
    carol.current_active_buddies = 2;
    carol.availability_score = 0.9;
    carol.bio = "Kotlin and coffee".to_owned();

    let mut bob = profile(2, "bob", "Platform", "Berlin");
    bob.can_accept_new_buddy = false;
    bob.current_active_buddies = 3;
    bob.location_override = Some("Remote".to_owned());
    bob.specialties = vec!["Observability".to_owned()];

    let alice = profile(1, "Alice", "Platform", "Berlin");
    vec![carol, bob, alice]
}

fn names(profiles: &[BuddyProfile]) -> Vec<String> {
    profiles.iter().map(BuddyProfile::display_name).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_sorts_by_name_case_insensitively() {
    let out = CatalogFilter::default().apply(&sample());
    assert_eq!(names(&out), ["Alice Tester", "bob Tester", "Carol Tester"]);
}

#[test]
fn query_terms_must_all_match() {
    let filter = CatalogFilter {
        query: "kotlin COFFEE".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["Carol Tester"]);

    let filter = CatalogFilter {
        query: "kotlin observability".to_owned(),
        ..CatalogFilter::default()
    };
    assert!(filter.apply(&sample()).is_empty());
}

#[test]
fn query_searches_specialties_and_tech_stack() {
    let filter = CatalogFilter {
        query: "observ".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["bob Tester"]);

    let filter = CatalogFilter {
        query: "rust".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(filter.apply(&sample()).len(), 3);
}

#[test]
fn location_filter_uses_effective_location() {
    let filter = CatalogFilter {
        location: Some("Berlin".to_owned()),
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["Alice Tester"]);

    let filter = CatalogFilter {
        location: Some("Remote".to_owned()),
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["bob Tester"]);
}

#[test]
fn unit_availability_and_accepting_filters_combine() {
    let filter = CatalogFilter {
        unit: Some("Platform".to_owned()),
        accepting_only: true,
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["Alice Tester"]);

    let filter = CatalogFilter {
        availability: Some(Availability::Limited),
        ..CatalogFilter::default()
    };
    assert_eq!(names(&filter.apply(&sample())), ["Carol Tester"]);
}

#[test]
fn is_default_detects_changes() {
    assert!(CatalogFilter::default().is_default());
    let filter = CatalogFilter {
        accepting_only: true,
        ..CatalogFilter::default()
    };
    assert!(!filter.is_default());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_by_availability_score_descending() {
    let filter = CatalogFilter {
        sort: CatalogSort::Availability,
        ..CatalogFilter::default()
    };
    assert_eq!(
        names(&filter.apply(&sample())),
        ["Carol Tester", "Alice Tester", "bob Tester"]
    );
}

#[test]
fn sort_by_free_capacity_descending() {
    let filter = CatalogFilter {
        sort: CatalogSort::Capacity,
        ..CatalogFilter::default()
    };
    assert_eq!(
        names(&filter.apply(&sample())),
        ["Alice Tester", "Carol Tester", "bob Tester"]
    );
}

#[test]
fn sort_values_round_trip() {
    for sort in CatalogSort::ALL {
        assert_eq!(CatalogSort::from_value(sort.value()), sort);
    }
    assert_eq!(CatalogSort::from_value("bogus"), CatalogSort::Name);
}

// =============================================================
// Facets
// =============================================================

#[test]
fn facets_are_sorted_and_distinct() {
    let f = facets(&sample());
    assert_eq!(f.units, ["Platform", "Sales"]);
    assert_eq!(f.locations, ["Berlin", "Lisbon", "Remote"]);
}

#[test]
fn facets_skip_profiles_without_attributes() {
    let mut bare = profile(9, "Zed", "", "");
    bare.employee = None;
    assert_eq!(facets(&[bare]), Facets::default());
}
