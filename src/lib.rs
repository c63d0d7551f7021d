//! # folio
//!
//! Leptos + WASM single-page portfolio: bio, projects, skills, experience,
//! education and contact, with a persisted theme and a French / English /
//! Japanese language switch.
//!
//! The preference core (`state`, `util::storage`, `util::dom`, `i18n`) has
//! no browser dependency outside the `csr` feature and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
