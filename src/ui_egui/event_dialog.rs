use egui::{Align2, Color32, Id, Key, Order, RichText, Sense, Vec2};
use egui_extras::DatePickerButton;

use crate::models::event::Event;
use crate::services::widget::{CancelTrigger, CommitTrigger, DraftField, WidgetCommand};
use crate::utils::date::{parse_event_date, to_iso_string};

const DIALOG_WIDTH: f32 = 300.0;

fn focus_marker_id() -> Id {
    Id::new("event_dialog_focused_draft")
}

/// Render the quick-add dialog over a dimmed overlay.
///
/// The dialog only reads the draft; every edit comes back as a command.
/// Clicking the overlay cancels, Enter in either field commits.
pub fn render_event_dialog(ctx: &egui::Context, draft: &Event) -> Vec<WidgetCommand> {
    let mut commands = Vec::new();

    let screen = ctx.screen_rect();
    let overlay_clicked = egui::Area::new(Id::new("event_dialog_overlay"))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, Color32::from_black_alpha(110));
            response.clicked()
        })
        .inner;

    egui::Area::new(Id::new("event_dialog"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.set_width(DIALOG_WIDTH);
                ui.label(RichText::new("Add Event").heading().strong());
                ui.add_space(8.0);

                let mut title = draft.title.clone();
                let title_response = ui.add(
                    egui::TextEdit::singleline(&mut title)
                        .hint_text("Event Title")
                        .desired_width(DIALOG_WIDTH),
                );
                if title_response.changed() {
                    commands.push(WidgetCommand::DraftFieldChanged {
                        field: DraftField::Title,
                        value: title,
                    });
                }

                // Focus the title once per opened draft
                let focused_for: Option<String> = ctx.data(|d| d.get_temp(focus_marker_id()));
                if focused_for.as_deref() != Some(draft.id.as_str()) {
                    title_response.request_focus();
                    ctx.data_mut(|d| d.insert_temp(focus_marker_id(), draft.id.clone()));
                }

                ui.add_space(4.0);
                let mut date = draft.date.clone();
                let date_response = ui
                    .horizontal(|ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut date)
                                .hint_text("YYYY-MM-DD")
                                .desired_width(DIALOG_WIDTH - 40.0),
                        );
                        if let Some(mut picked) = parse_event_date(&draft.date) {
                            let picker = ui.add(
                                DatePickerButton::new(&mut picked)
                                    .id_source("event_dialog_date_picker")
                                    .calendar_week(false),
                            );
                            if picker.changed() {
                                commands.push(WidgetCommand::DraftFieldChanged {
                                    field: DraftField::Date,
                                    value: to_iso_string(picked),
                                });
                            }
                        }
                        response
                    })
                    .inner;
                if date_response.changed() {
                    commands.push(WidgetCommand::DraftFieldChanged {
                        field: DraftField::Date,
                        value: date,
                    });
                }

                let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));
                if enter_pressed && (title_response.lost_focus() || date_response.lost_focus()) {
                    commands.push(WidgetCommand::CommitDraft {
                        trigger: CommitTrigger::EnterKey,
                    });
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Add Event").clicked() {
                        commands.push(WidgetCommand::CommitDraft {
                            trigger: CommitTrigger::AddButton,
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        commands.push(WidgetCommand::CancelDraft {
                            trigger: CancelTrigger::CancelButton,
                        });
                    }
                });
            });
        });

    if overlay_clicked {
        commands.push(WidgetCommand::CancelDraft {
            trigger: CancelTrigger::Overlay,
        });
    }

    commands
}
