//! Employee Directory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod notify;
mod operations;
mod session;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init_logger("EmployeeDirectory", config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("Starting, API at {}", config.api.base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
