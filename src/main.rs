mod app;
mod auth;
mod components;
mod config;
mod error;
mod help;
mod logging;
mod pages;
mod plants;
mod scroll;
mod settings;
mod storage;
mod validation;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(&config.log_filter);
    tracing::info!("Starting Germinah (auth configured: {})", config.supabase.is_some());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
