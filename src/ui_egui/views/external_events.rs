//! Panel of draggable external event chips.

use egui::{Align2, FontId, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::models::event::ExternalEvent;
use crate::ui_egui::drag::{DragContext, DragManager, DragSource};
use crate::ui_egui::theme::CalendarTheme;

const CHIP_HEIGHT: f32 = 26.0;

/// Drag payload for a chip: its title and id
pub fn extract_payload(chip: &ExternalEvent) -> DragSource {
    DragSource::External(ExternalEvent::new(chip.id.clone(), chip.title.clone()))
}

pub struct ExternalEventsPanel;

impl ExternalEventsPanel {
    /// Draw the chips. Dragging starts only when drops are enabled and
    /// the grid is `interactive`.
    pub fn show(
        ui: &mut egui::Ui,
        chips: &[ExternalEvent],
        theme: &CalendarTheme,
        drop_target_enabled: bool,
        interactive: bool,
    ) {
        let palette = CalendarCellPalette::from_theme(theme);
        let enabled = drop_target_enabled && interactive;

        ui.heading("Events");
        ui.label(egui::RichText::new("Drag onto a day").weak());
        ui.add_space(6.0);

        if chips.is_empty() {
            ui.label(egui::RichText::new("No external events configured").italics());
            return;
        }

        for chip in chips {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(ui.available_width(), CHIP_HEIGHT), Sense::drag());

            let fill = if enabled {
                palette.event_bg
            } else {
                palette.event_bg.gamma_multiply(0.5)
            };
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter()
                .rect_stroke(rect, 4.0, Stroke::new(1.0, palette.border));
            ui.painter().text(
                rect.left_center() + Vec2::new(8.0, 0.0),
                Align2::LEFT_CENTER,
                &chip.title,
                FontId::proportional(13.0),
                palette.event_text,
            );

            if enabled {
                if response.hovered() && !DragManager::is_active(ui.ctx()) {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }
                if response.drag_started() {
                    DragManager::begin(ui.ctx(), DragContext::new(extract_payload(chip)));
                }
            }

            ui.add_space(4.0);
        }

        if !drop_target_enabled {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Dropping is disabled").weak().small());
        }
    }
}
