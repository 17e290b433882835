//! Theme module for the egui calendar widget
//!
//! Defines the colors used by the month grid, the chips panel and the
//! quick-add dialog.

use egui::Color32;

use crate::models::ui::ThemeKind;

/// A calendar theme defining all colors used in the widget
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Weekend day background color
    pub weekend_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Day-of-week header strip
    pub header_background: Color32,
    pub header_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (days of neighbouring months)
    pub text_secondary: Color32,

    /// Event bars and external chips
    pub event_background: Color32,
    pub event_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(255, 250, 220),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(240, 242, 246),
            header_text: Color32::from_rgb(60, 60, 70),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(160, 160, 160),
            event_background: Color32::from_rgb(55, 136, 216),
            event_text: Color32::WHITE,
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(60, 58, 40),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(50, 52, 58),
            header_text: Color32::from_rgb(220, 220, 225),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 120),
            event_background: Color32::from_rgb(45, 110, 180),
            event_text: Color32::WHITE,
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Apply the base egui visuals matching this theme
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}
