mod app;
mod color;
mod config;
mod data;
mod present;
mod state;
mod ui;

use app::GurumeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let source = config::startup_source();
    log::info!("Starting with source {}", source.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "グルメサーチ",
        options,
        Box::new(move |_cc| Ok(Box::new(GurumeApp::new(&source)))),
    )
}
