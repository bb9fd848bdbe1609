//! # client
//!
//! Leptos + WASM frontend showing two contact forms side by side: one
//! validated by per-field rules, one by a declarative schema. All form state
//! lives in the `forms` crate; this crate only renders it and wires browser
//! events and timers to it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
