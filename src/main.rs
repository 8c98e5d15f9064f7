//! To-Do Frontend Entry Point

mod models;
mod todo_list;
mod config;
mod logging;
mod session;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("[APP] mounting");
    mount_to_body(App);
}
