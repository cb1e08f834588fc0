//! Homework Burndown Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod markdown;
mod share;
mod store;

use app::App;
use leptos::prelude::*;

const APP_NAME: &str = "Homework Burndown";

fn main() {
    console_error_panic_hook::set_once();

    let level = console_logger::level_from_name(option_env!("BURNDOWN_LOG"));
    if let Err(e) = console_logger::init_logger(APP_NAME, level) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }

    mount_to_body(App);
}
