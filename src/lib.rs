//! # collabsphere-web
//!
//! Leptos + WASM frontend for the CollabSphere project-based learning
//! management system: login and registration, an admin CRUD dashboard for
//! subjects, classes and users, and a browser-persisted auth session.
//!
//! State logic (`state`, `net`, `util`) is plain Rust and runs natively in
//! tests. Browser glue is gated behind the `hydrate` feature and degrades to
//! no-op stubs otherwise.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
