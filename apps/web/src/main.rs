// Browser-only modules are compiled for wasm32; the rest also builds natively
// so its tests run with plain `cargo test`.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::{
        app::App,
        app_lib::{build_info, config::AppConfig, logging},
    };
    use leptos::prelude::mount_to_body;

    let config = AppConfig::load();
    logging::init(config.tracing_level());
    tracing::info!(
        version = build_info::package_version(),
        commit = build_info::git_commit_hash(),
        api = %config.api_base_url,
        "starting Alenna web"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
