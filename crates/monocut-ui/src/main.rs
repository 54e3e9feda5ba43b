#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod theme;

use mimalloc::MiMalloc;
use monocut_api::ApiConfig;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> eframe::Result {
    helpers::log::init_logging();

    let config = ApiConfig::from_env();
    info!(
        version  = env!("CARGO_PKG_VERSION"),
        backend  = %config.base_url,
        timeout  = ?config.timeout,
        log_file = %helpers::log::log_file_path().display(),
        "starting MonoCut",
    );

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("AI智能剪辑助手")
            .with_inner_size([1600.0, 900.0])
            .with_min_inner_size([1280.0, 720.0])
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "MonoCut",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::MonoCutApp::new(cc, config)))),
    )
}
