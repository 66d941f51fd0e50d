use super::*;
use models::EmployeeRole;

fn employee(id: i64, first: &str, last: &str, unit: &str) -> Employee {
    Employee {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: String::new(),
        title: "Engineer".to_owned(),
        unit: unit.to_owned(),
        team: Some("Core".to_owned()),
        location: "Berlin".to_owned(),
        start_date: None,
        role: EmployeeRole::Employee,
        tech_stack: Vec::new(),
        interests: Vec::new(),
        is_buddy_guide: id % 2 == 0,
        is_newcomer: id % 2 == 1,
    }
}

fn sample() -> Vec<Employee> {
    vec![
        employee(1, "Grace", "Hopper", "Research"),
        employee(2, "Ada", "Lovelace", "Platform"),
        employee(3, "Alan", "Turing", "Platform"),
    ]
}

fn ids(out: &[Employee]) -> Vec<i64> {
    out.iter().map(|e| e.id).collect()
}

#[test]
fn default_sorts_by_last_name() {
    assert_eq!(ids(&DirectoryFilter::default().apply(&sample())), [1, 2, 3]);
}

#[test]
fn query_matches_name_and_unit() {
    let filter = DirectoryFilter {
        query: "platform a".to_owned(),
        scope: DirectoryScope::All,
    };
    assert_eq!(ids(&filter.apply(&sample())), [2, 3]);

    let filter = DirectoryFilter {
        query: "LOVE".to_owned(),
        scope: DirectoryScope::All,
    };
    assert_eq!(ids(&filter.apply(&sample())), [2]);
}

#[test]
fn scope_limits_to_role_flags() {
    let guides = DirectoryFilter {
        query: String::new(),
        scope: DirectoryScope::BuddyGuides,
    };
    assert_eq!(ids(&guides.apply(&sample())), [2]);

    let newcomers = DirectoryFilter {
        query: String::new(),
        scope: DirectoryScope::Newcomers,
    };
    assert_eq!(ids(&newcomers.apply(&sample())), [1, 3]);
}

#[test]
fn team_is_searchable() {
    let filter = DirectoryFilter {
        query: "core".to_owned(),
        scope: DirectoryScope::All,
    };
    assert_eq!(filter.apply(&sample()).len(), 3);
}
