//! Sweet Shop Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod pages;
mod session;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Sweet shop UI starting");
    mount_to_body(App);
}
