//! # province-panel
//!
//! Leptos + WASM province information panel: a sliding sidebar that loads a
//! static province catalog, falls back to a default record for unknown
//! provinces, and shows About / Schools / Photos tabs in a bottom-sheet or
//! side-drawer layout depending on viewport width.
//!
//! The state machines live in `state` and run without a browser; `components`
//! wires them to Leptos signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
