use super::*;
use serde_json::json;

fn employee(id: i64, first: &str, hr: bool) -> Employee {
    serde_json::from_value(json!({
        "id": id,
        "firstName": first,
        "lastName": "Doe",
        "title": "Engineer",
        "unit": "Platform",
        "location": "Berlin",
        "role": if hr { "HR" } else { "Employee" },
        "isBuddyGuide": !hr
    }))
    .unwrap()
}

#[test]
fn empty_table_prints_placeholder() {
    assert_eq!(render_table::<Employee>(&[]), "(none)\n");
}

#[test]
fn table_columns_align_to_widest_cell() {
    let table = render_table(&[employee(7, "Ada", false), employee(12, "Bartholomew", true)]);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID  NAME"));
    assert_eq!(lines[1], "7   Ada Doe          Engineer  Platform  Berlin    buddy");
    assert_eq!(lines[2], "12  Bartholomew Doe  Engineer  Platform  Berlin    hr");
}

#[test]
fn match_row_uses_placeholders() {
    let m: BuddyMatch = serde_json::from_value(json!({
        "id": 3,
        "buddyId": 7,
        "newcomerId": 8,
        "status": "Pending",
        "compatibilityScore": 81.6
    }))
    .unwrap();
    assert_eq!(m.cells(), ["3", "Employee #7", "Employee #8", "Pending", "82%", "-"]);
}
