//! Theme preference initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes the new value back.
//! Without a stored value the system `prefers-color-scheme` decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "buddy_portal_theme";

/// Interpret a stored value. Anything other than `dark`/`light` counts as unset.
pub fn parse_stored(raw: &str) -> Option<bool> {
    match raw.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Value written back for a preference.
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the dark mode preference.
///
/// Returns the stored choice when there is one, otherwise the system
/// preference. Always `false` outside the browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage
                .get_item(STORAGE_KEY)
                .ok()
                .flatten()
                .as_deref()
                .and_then(parse_stored)
            {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", stored_value(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, stored_value(next)).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
    }
    next
}
