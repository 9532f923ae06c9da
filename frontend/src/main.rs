use hrms_frontend::{config, init_logging, App};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn main() {
    init_logging();
    log::info!("Starting HRMS Lite frontend: resolving runtime config");

    spawn_local(async move {
        config::init().await;
        mount_to_body(|| view! { <App/> });
    });
}
