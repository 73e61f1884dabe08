//! Browser client for the multisig proposal UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app renders entirely in the browser and talks to the chain through a
//! wallet bridge the host page injects; the server side only renders the
//! shell and serves assets. `net` owns the wallet boundary, `state` the view
//! state enums, and `pages`/`components` the rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point, invoked by the generated module loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
