use super::CalendarApp;
use crate::services::widget::{CancelTrigger, WidgetCommand};

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(
        &mut self,
        ctx: &egui::Context,
        dialog_open: bool,
        commands: &mut Vec<WidgetCommand>,
    ) {
        ctx.input(|i| {
            if dialog_open {
                if i.key_pressed(egui::Key::Escape) {
                    commands.push(WidgetCommand::CancelDraft {
                        trigger: CancelTrigger::EscapeKey,
                    });
                }
                return;
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                self.jump_to_today();
            }

            // Arrow key navigation
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigate_previous();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.navigate_next();
            }
        });
    }
}
