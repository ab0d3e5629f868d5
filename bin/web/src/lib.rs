//! daily-verse web application.
//!
//! This crate provides the Leptos-based browser application (route
//! declarations, the guarded outlet, and pages) and, with the `serve`
//! feature, a static file server for the built bundle.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod outlet;
pub mod pages;
pub mod routes;
#[cfg(feature = "serve")]
pub mod serve;
pub mod session;

/// Mounts the application into the document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
