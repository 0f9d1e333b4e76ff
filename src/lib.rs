//! Northwind Studio - marketing site
//!
//! A single-page studio website built with Leptos: an intro loader, scroll
//! driven sections, decorative canvas and cursor effects, and a contact form
//! that forwards leads to an external intake API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
