use super::*;

#[test]
fn parse_stored_accepts_known_values() {
    assert_eq!(parse_stored("dark"), Some(true));
    assert_eq!(parse_stored(" light "), Some(false));
}

#[test]
fn parse_stored_ignores_legacy_or_garbage() {
    assert_eq!(parse_stored("true"), None);
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("Dark"), None);
}

#[test]
fn stored_value_round_trips() {
    for dark in [true, false] {
        assert_eq!(parse_stored(stored_value(dark)), Some(dark));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
