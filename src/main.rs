//! Ticklist Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod storage;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    tracing::info!("starting ticklist frontend");

    mount_to_body(App);
}
