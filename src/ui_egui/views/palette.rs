use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub other_month_text: Color32,
    pub hover_overlay: Color32,
    pub drop_overlay: Color32,
    pub event_bg: Color32,
    pub event_text: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            other_month_text: theme.text_secondary,
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 40 } else { 25 }),
            drop_overlay: with_alpha(theme.today_border, if theme.is_dark { 90 } else { 60 }),
            event_bg: theme.event_background,
            event_text: theme.event_text,
            header_bg: theme.header_background,
            header_text: theme.header_text,
        }
    }
}
