// Calendar Widget Application
// Main entry point

use calendar_widget::services::settings::SettingsService;
use calendar_widget::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Widget");

    let settings_service = SettingsService::from_env();
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Widget",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
}
