#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::PacflowApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let case_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("pacflow"),
        ..Default::default()
    };

    eframe::run_native(
        "pacflow",
        options,
        Box::new(move |cc| Ok(Box::new(PacflowApp::new(cc, case_path)))),
    )
}
