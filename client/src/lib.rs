//! # client
//!
//! Leptos + WASM frontend for the onboarding buddy portal.
//!
//! This crate contains pages, components, per-page view state, and the REST
//! client for the buddy matching backend. It renders server-side under the
//! `ssr` feature (hosted by `server`) and hydrates in the browser under
//! `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
