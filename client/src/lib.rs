//! # client
//!
//! Leptos + WASM frontend for the fitdash member dashboard.
//!
//! This crate contains the dashboard page, its widgets, the view state they
//! share through context, and small browser helpers (theme persistence,
//! owned timers, layout breakpoints). The `fitdash` host renders it with the
//! `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
