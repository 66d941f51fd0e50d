//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme, nav drawer) out of the session so
//! chrome controls can change without touching who is signed in.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Collapsible navigation on narrow screens.
    pub nav_open: bool,
}

impl UiState {
    pub fn theme_icon(&self) -> &'static str {
        if self.dark_mode { "☀" } else { "☾" }
    }

    pub fn theme_title(&self) -> &'static str {
        if self.dark_mode { "Switch to light theme" } else { "Switch to dark theme" }
    }
}
