// main.rs - Conway's Game of Life desktop window

use clap::Parser;
use eframe::egui;
use log::{error, info};

use conway_life::config::Config;

mod ui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let sim = match config.build_simulation() {
        Ok(sim) => sim,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    info!("Controls:");
    info!("  Space       - Pause / Resume");
    info!("  S           - Step (when paused)");
    info!("  Left click  - Toggle cell (when paused)");
    info!("  C           - Clear grid (when paused)");
    info!("  R           - Randomize grid (when paused)");
    info!("  N           - Next pattern (when paused)");
    info!("  Scroll      - Speed up / slow down");
    info!("  Escape      - Quit");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Game Of Life",
        options,
        Box::new(move |_cc| Box::new(ui::LifeApp::new(sim))),
    )
}
