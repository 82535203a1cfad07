mod app;
mod dialogs;

use anyhow::anyhow;
use app::DesktopApp;
use eframe::egui;
use image_to_pdf::Config;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let config = Config::default();
    info!("=== {} starting ===", config.window_title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(DesktopApp::new(config))),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}
