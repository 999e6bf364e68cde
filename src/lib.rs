//! # unirea-ui
//!
//! Leptos + WASM frontend for the FC Unirea club website. A thin
//! presentation layer over the club's remote HTTP API: announcements,
//! squad listing, registration/login (including Google OAuth and
//! password-reset flows), and a small admin panel for players and matches.
//!
//! All durable state and business logic live server-side; this crate holds
//! pages, components, the shared session state, network types, and the
//! validation helpers that drive inline form feedback.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
