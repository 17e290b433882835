use super::CalendarApp;
use crate::utils::date::shift_month_preserving_day;
use chrono::Local;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, 1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }
}
