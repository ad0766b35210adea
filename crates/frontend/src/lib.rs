//! TONPool webview dashboard - Yew WASM frontend.
//!
//! This crate provides the web UI rendered inside the Telegram webview.

mod api;
mod app;
mod components;
mod tabs;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
