//! Envesti site: marketing pages plus the signed-in account dashboard.
//!
//! ARCHITECTURE
//! ============
//! The crate compiles twice. With `ssr` the server renders every route to
//! HTML; with `hydrate` the same components attach to that HTML in the
//! browser and take over event handling and remote fetches.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod menus;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive tree to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
