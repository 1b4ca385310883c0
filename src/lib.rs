//! # motoprice
//!
//! Leptos + WASM front-end for the motorcycle price-estimation service.
//!
//! This crate renders the consumer prediction flow (landing page, prediction
//! form, result view) and the admin dashboard for training records
//! (pagination, filtering, bulk delete, CSV upload, train trigger). All
//! inference and persistence live in an external HTTP service; this crate
//! only manages form/table state and issues REST calls against it.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
