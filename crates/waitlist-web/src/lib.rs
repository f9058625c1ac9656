//! Waitlist Landing Page
//!
//! Leptos-based WASM frontend: hero and call-to-action signup forms plus the
//! stats row they bump after a successful signup.

mod app;
mod binding;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
