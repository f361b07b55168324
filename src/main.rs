#![allow(warnings)]
//! Chore App Frontend Entry Point

mod models;
mod time;
mod config;
mod logging;
mod api;
mod store;
mod controller;
mod form;
mod countdown;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);
    if config.api_base_url.is_empty() {
        tracing::warn!("CHORE_API_BASE_URL was not set at build time; API requests will fail");
    }

    mount_to_body(move || view! { <App config=config /> });
}
