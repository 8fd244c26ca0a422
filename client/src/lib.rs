//! # client
//!
//! Leptos + WASM front end for the document kanban board.
//!
//! Pages and components render the six-column board; all status mapping,
//! grouping, and move validation comes from the `kanban` crate so the CLI
//! and the browser agree on which moves are legal.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
