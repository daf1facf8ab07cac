use eframe::egui;
use log::info;

mod backend;
mod config;
mod ui;

use config::DashboardConfig;
use ui::FinanceDashboardApp;

pub const WINDOW_TITLE: &str = "Personal Finance Dashboard";

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Personal Finance Dashboard");

    let config = DashboardConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(WINDOW_TITLE)
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(FinanceDashboardApp::new(cc, &config)))),
    )
}
