//! Menu Frontend Entry Point

mod models;
mod error;
mod cart;
mod sidebar;
mod search;
mod nav;
mod config;
mod presentation;
mod controller;
mod logger;
mod commands;
mod adapters;
mod host;
mod store;
mod context;
mod catalog;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = AppConfig::load();
    logger::init(config.level_filter());
    log::info!("[APP] Starting with log level {}", config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
