mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use app::App;
use dioxus::logger::tracing::{warn, Level};

#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
fn main() {
    init_logger();

    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Peta SMK Jawa Timur"));
    match platform::desktop::paths::default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => warn!("{err:#}; using the default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[cfg(not(all(feature = "desktop", not(target_arch = "wasm32"))))]
fn main() {
    init_logger();
    dioxus::launch(App);
}

fn init_logger() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        warn!("logger already initialised: {err}");
    }
}
