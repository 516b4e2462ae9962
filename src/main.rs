//! Area Route Planner.
//!
//! Rechteck auf der Karte aufziehen, Abdeckungsroute für die Fläche planen
//! und als Linie darüber zeichnen.

use area_route_planner::{ui, SelectionOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Area Route Planner v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SelectionOptions::config_path();
        let selection_options = SelectionOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Area Route Planner"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Area Route Planner",
            options,
            Box::new(|_cc| Ok(Box::new(ui::MapViewApp::new(selection_options)))),
        )
    }
}
