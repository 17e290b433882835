pub mod external_events;
mod month_day_cell;
pub mod month_view;
mod palette;

pub use external_events::ExternalEventsPanel;
pub use month_view::MonthView;
