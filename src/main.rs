//! Docassist - desktop client for a documentation-generation service
//!
//! A form UI that submits code or content to a remote documentation
//! service and displays the generated text.

mod api;
mod app;
mod core;
mod ui;

use app::DocAssistApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Docassist...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Docassist"),
        ..Default::default()
    };

    eframe::run_native(
        "Docassist",
        native_options,
        Box::new(|cc| Ok(Box::new(DocAssistApp::new(cc)?))),
    )
}
