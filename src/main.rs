//! Series Viewer - two-column CSV data viewer
//!
//! Loads `x,y` rows from a CSV file, shows them in a table and as line
//! series, reports per-column min/max/mean, and saves the data or the chart.

mod charts;
mod config;
mod data;
mod error;
mod gui;
mod session;
mod stats;

use config::AppConfig;
use eframe::egui;
use gui::SeriesViewerApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load_or_default(&AppConfig::default_path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Data Visualization"),
        ..Default::default()
    };

    eframe::run_native(
        "Data Visualization",
        options,
        Box::new(|cc| Ok(Box::new(SeriesViewerApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the viewer: {e}"))
}
