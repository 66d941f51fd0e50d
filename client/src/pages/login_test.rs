use super::*;
use models::EmployeeRole;

fn employee(id: i64, first: &str, role: EmployeeRole, guide: bool, newcomer: bool) -> Employee {
    Employee {
        id,
        first_name: first.to_owned(),
        last_name: "Example".to_owned(),
        email: String::new(),
        title: if guide { "Staff Engineer" } else { "Engineer" }.to_owned(),
        unit: String::new(),
        team: None,
        location: String::new(),
        start_date: None,
        role,
        tech_stack: Vec::new(),
        interests: Vec::new(),
        is_buddy_guide: guide,
        is_newcomer: newcomer,
    }
}

fn sample() -> Vec<Employee> {
    vec![
        employee(1, "Zoe", EmployeeRole::Employee, false, true),
        employee(2, "Yann", EmployeeRole::Employee, true, false),
        employee(3, "Xena", EmployeeRole::Hr, false, false),
        employee(4, "Will", EmployeeRole::Employee, false, false),
        employee(5, "Abe", EmployeeRole::Employee, true, false),
    ]
}

#[test]
fn switcher_groups_by_role_then_name() {
    let ids: Vec<_> = switcher_order(&sample(), "").iter().map(|e| e.id).collect();
    assert_eq!(ids, [3, 5, 2, 1, 4]);
}

#[test]
fn switcher_filters_by_title() {
    let ids: Vec<_> = switcher_order(&sample(), "staff").iter().map(|e| e.id).collect();
    assert_eq!(ids, [5, 2]);
}

#[test]
fn role_summary_lists_flags() {
    assert_eq!(role_summary(&sample()[0]), "Employee · Newcomer");
    assert_eq!(role_summary(&sample()[2]), "HR");
    assert_eq!(role_summary(&sample()[1]), "Employee · Buddy guide");
}
