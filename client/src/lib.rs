//! # client
//!
//! Leptos + WASM front-end for the Krishi farm advisor.
//!
//! This crate contains the pages, the browser `localStorage` backing store,
//! the signal-mirrored preference contexts built on `prefs`, and the
//! opportunity-finder HTTP call. Browser-only code sits behind the `csr`
//! feature; native builds compile stubs so the pure helpers stay testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
