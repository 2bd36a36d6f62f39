//! EcoLeta Frontend Entry Point

mod app;
mod components;
mod context;
mod geolocation;
mod map_bridge;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] EcoLeta starting");
    mount_to_body(App);
}
