use super::*;

#[test]
fn ui_state_defaults_to_light_with_closed_nav() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
}

#[test]
fn theme_toggle_offers_the_other_theme() {
    let mut state = UiState::default();
    assert_eq!(state.theme_icon(), "☾");
    assert_eq!(state.theme_title(), "Switch to dark theme");
    state.dark_mode = true;
    assert_eq!(state.theme_icon(), "☀");
    assert_eq!(state.theme_title(), "Switch to light theme");
}
