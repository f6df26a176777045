//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod logging;
mod storage;
mod store;
mod todos;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::AppConfig::default().log_level);
    mount_to_body(|| view! { <App /> });
}
