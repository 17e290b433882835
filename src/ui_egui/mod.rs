mod app;
pub mod drag;
mod event_dialog;
pub mod theme;
#[cfg(test)]
mod test_input;
mod views;

pub use app::CalendarApp;
pub use event_dialog::render_event_dialog;
pub use views::{ExternalEventsPanel, MonthView};
