//! DocForge - guideline document assembler
//!
//! A Rust desktop app for composing a document from catalogued note
//! snippets: browse, select, reorder, preview, and print.

mod app;
mod core;
mod ui;

use app::DocforgeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting DocForge {}", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("DocForge"),
        ..Default::default()
    };

    eframe::run_native(
        "docforge",
        native_options,
        Box::new(|cc| Ok(Box::new(DocforgeApp::new(cc)))),
    )
}
