//! Day cell rendering for the month view.
//!
//! Paints one day with its event bars and turns clicks, drops and delete
//! buttons into widget commands.

use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{CellContext, MonthView};
use crate::models::event::Event;
use crate::services::widget::WidgetCommand;
use crate::ui_egui::drag::{DragContext, DragManager, DragSource};
use crate::utils::date::to_iso_string;

const DAY_NUMBER_HEIGHT: f32 = 24.0;
const EVENT_BAR_HEIGHT: f32 = 16.0;
const EVENT_BAR_GAP: f32 = 2.0;
const MORE_LABEL_HEIGHT: f32 = 14.0;
const DELETE_WIDTH: f32 = 16.0;
const MAX_VISIBLE_EVENTS: usize = 3;

impl MonthView {
    /// Shorten `text` with a trailing "…" until it fits in `max_width`
    pub(super) fn truncate_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &FontId,
        max_width: f32,
    ) -> String {
        let width_of = |candidate: String| {
            ui.fonts(|f| {
                f.layout_no_wrap(candidate, font_id.clone(), Color32::WHITE)
                    .size()
                    .x
            })
        };

        if width_of(text.to_string()) <= max_width {
            return text.to_string();
        }

        // Binary search the longest char prefix that still fits with the ellipsis
        let boundaries: Vec<usize> = text.char_indices().map(|(index, _)| index).collect();
        let mut low = 0;
        let mut high = boundaries.len().saturating_sub(1);
        let mut best = None;
        while low < high {
            let mid = (low + high + 1) / 2;
            let candidate = format!("{}…", &text[..boundaries[mid]]);
            if width_of(candidate.clone()) <= max_width {
                best = Some(candidate);
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        match best {
            Some(candidate) => candidate,
            None if width_of("…".to_string()) <= max_width => "…".to_string(),
            None => String::new(),
        }
    }

    /// How many bars fit under the day number, never more than three
    pub(super) fn visible_event_slots(cell_height: f32) -> usize {
        let room = cell_height - DAY_NUMBER_HEIGHT - MORE_LABEL_HEIGHT;
        ((room / (EVENT_BAR_HEIGHT + EVENT_BAR_GAP)).floor() as usize).clamp(1, MAX_VISIBLE_EVENTS)
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        rect: Rect,
        date: NaiveDate,
        cells: &CellContext<'_>,
        commands: &mut Vec<WidgetCommand>,
    ) {
        let palette = cells.palette;
        let response = ui.interact(rect, ui.id().with(("month_cell", date)), Sense::click());

        let is_today = date == cells.today;
        let in_month = Self::is_in_month(date, cells.displayed_month);

        // Background
        let bg_color = if is_today {
            palette.today_bg
        } else if Self::is_weekend_cell(date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Border
        let border_color = if is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        if cells.interactive {
            let ctx = ui.ctx().clone();
            let accepting_drag = DragManager::active(&ctx)
                .filter(|_| ui.rect_contains_pointer(rect))
                .filter(|drag| match drag.source {
                    DragSource::External(_) => cells.drop_target_enabled,
                    DragSource::Existing { .. } => cells.events_editable,
                });

            if accepting_drag.is_some() {
                ui.painter().rect_filled(rect, 2.0, palette.drop_overlay);
                ui.painter()
                    .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.today_border));
                DragManager::update_hover(&ctx, date);
                if ui.input(|i| i.pointer.any_released()) {
                    if let Some(finished) = DragManager::finish(&ctx) {
                        commands.extend(finished.source.drop_command(date));
                    }
                }
            } else if response.hovered() {
                ui.painter().rect_filled(rect, 2.0, palette.hover_overlay);
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            if response.clicked() {
                commands.push(WidgetCommand::DateClicked(to_iso_string(date)));
            }
        }

        // Day number, dimmed outside the displayed month
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            Align2::LEFT_TOP,
            date.format("%-d").to_string(),
            FontId::proportional(14.0),
            if in_month {
                palette.text
            } else {
                palette.other_month_text
            },
        );

        let day_events: Vec<&Event> = cells.state.store.events_on(date).collect();
        let slots = Self::visible_event_slots(rect.height());
        let shown = day_events.len().min(slots);

        for (index, event) in day_events.iter().take(shown).enumerate() {
            let bar = Rect::from_min_size(
                Pos2::new(
                    rect.left() + 3.0,
                    rect.top() + DAY_NUMBER_HEIGHT + index as f32 * (EVENT_BAR_HEIGHT + EVENT_BAR_GAP),
                ),
                Vec2::new(rect.width() - 6.0, EVENT_BAR_HEIGHT),
            );
            Self::render_event_bar(ui, bar, event, date, index, cells, commands);
        }

        if day_events.len() > shown {
            ui.painter().text(
                Pos2::new(rect.right() - 5.0, rect.bottom() - 3.0),
                Align2::RIGHT_BOTTOM,
                format!("+{} more", day_events.len() - shown),
                FontId::proportional(11.0),
                palette.other_month_text,
            );
        }
    }

    fn render_event_bar(
        ui: &mut egui::Ui,
        bar: Rect,
        event: &Event,
        date: NaiveDate,
        index: usize,
        cells: &CellContext<'_>,
        commands: &mut Vec<WidgetCommand>,
    ) {
        let palette = cells.palette;
        ui.painter().rect_filled(bar, 3.0, palette.event_bg);

        let font_id = FontId::proportional(11.0);
        let title = Self::truncate_to_width(ui, &event.title, &font_id, bar.width() - DELETE_WIDTH - 6.0);
        ui.painter().text(
            Pos2::new(bar.left() + 4.0, bar.center().y),
            Align2::LEFT_CENTER,
            title,
            font_id,
            palette.event_text,
        );

        let sense = if cells.events_editable {
            Sense::click_and_drag()
        } else {
            Sense::click()
        };
        let hover_text = if event.title.is_empty() {
            "(untitled)"
        } else {
            event.title.as_str()
        };
        let bar_response = ui
            .interact(bar, ui.id().with(("month_event", date, index)), sense)
            .on_hover_text(hover_text);

        if cells.interactive && cells.events_editable && bar_response.drag_started() {
            DragManager::begin(
                ui.ctx(),
                DragContext::new(DragSource::Existing {
                    event_id: event.id.clone(),
                    title: event.title.clone(),
                    original_date: event.date.clone(),
                }),
            );
        }

        // Delete affordance on the right end of the bar
        let delete_rect = Rect::from_min_size(
            Pos2::new(bar.right() - DELETE_WIDTH, bar.top()),
            Vec2::new(DELETE_WIDTH, bar.height()),
        );
        let delete_response = ui
            .interact(
                delete_rect,
                ui.id().with(("month_event_delete", date, index)),
                Sense::click(),
            )
            .on_hover_text("Delete");
        let cross_color = if delete_response.hovered() {
            palette.event_text
        } else {
            palette.event_text.gamma_multiply(0.7)
        };
        ui.painter().text(
            delete_rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(10.0),
            cross_color,
        );

        if cells.interactive && delete_response.clicked() {
            commands.push(WidgetCommand::DeleteEvent {
                id: event.id.clone(),
            });
        }
    }
}
