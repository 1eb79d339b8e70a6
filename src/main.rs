// Month Planner Application
// Main entry point

use month_planner::models::settings::{Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use month_planner::services::seed;
use month_planner::services::settings::SettingsService;
use month_planner::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Planner");

    let settings_service = SettingsService::default_location();
    let settings = match &settings_service {
        Some(service) => {
            log::info!("Using settings file {}", service.path().display());
            service.load_or_default()
        }
        None => {
            log::warn!("No config directory available; settings will not be saved");
            Settings::default()
        }
    };

    let store = seed::load_seed(settings.seed_path.as_deref()).unwrap_or_else(|err| {
        log::error!("Failed to load seed events, using built-in seed: {:#}", err);
        seed::builtin_store()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Planner")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Planner",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, store, settings, settings_service)))),
    )
}
