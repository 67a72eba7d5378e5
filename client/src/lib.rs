//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the static content tables, UI state, browser helpers,
//! section components and the page itself. The `scene` crate draws the
//! decorative canvases through the `SceneHost` bridge component. The server
//! crate renders [`app::shell`] with the `ssr` feature; the browser bundle
//! calls [`hydrate`] with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
