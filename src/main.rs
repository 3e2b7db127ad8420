//! GoRestaurant Dashboard Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Logger first, so a bad inline config is reported
    logger::init(DashboardConfig::default().level_filter());
    let config = DashboardConfig::load();
    logger::set_level(config.level_filter());
    log::info!("GoRestaurant dashboard starting ({})", config.describe_backend());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
