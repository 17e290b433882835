mod navigation;
mod shortcuts;

use crate::models::settings::Settings;
use crate::services::widget::{CalendarWidget, WidgetCommand};
use crate::ui_egui::drag::DragManager;
use crate::ui_egui::event_dialog::render_event_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{ExternalEventsPanel, MonthView};
use chrono::{Local, NaiveDate};

const SIDEBAR_WIDTH: f32 = 170.0;

pub struct CalendarApp {
    settings: Settings,
    /// Owner of the event store, draft and dialog state
    widget: CalendarWidget,
    /// Any day inside the displayed month
    current_date: NaiveDate,
    active_theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let active_theme = CalendarTheme::for_kind(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let current_date = settings
            .initial_date
            .unwrap_or_else(|| Local::now().date_naive());
        let widget = CalendarWidget::from_settings(&settings);

        log::info!(
            "Calendar widget ready: view={}, month={}, {} events",
            settings.initial_view.as_str(),
            current_date.format("%Y-%m"),
            widget.state().store.len()
        );

        Self {
            settings,
            widget,
            current_date,
            active_theme,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        // The dialog opens on the frame after the click that requested it
        let dialog_open = self.widget.state().is_editing();
        let mut commands: Vec<WidgetCommand> = Vec::new();

        self.handle_keyboard_shortcuts(ctx, dialog_open, &mut commands);
        DragManager::clear_hover(ctx);

        egui::TopBottomPanel::top("navigation_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| self.render_navigation_bar(ui));
        });

        egui::SidePanel::left("external_events")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ExternalEventsPanel::show(
                    ui,
                    &self.settings.external_events,
                    &self.active_theme,
                    self.settings.drop_target_enabled,
                    !dialog_open,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            commands.extend(MonthView::show(
                ui,
                self.widget.state(),
                &self.settings,
                self.current_date,
                &self.active_theme,
                !dialog_open,
            ));
        });

        if dialog_open {
            commands.extend(render_event_dialog(ctx, &self.widget.state().draft));
        }

        DragManager::paint_preview(
            ctx,
            self.active_theme.event_background,
            self.active_theme.event_text,
        );
        // A release that no day cell claimed ends the drag without a drop
        if ctx.input(|i| i.pointer.any_released()) {
            DragManager::cancel(ctx);
        }

        self.widget.dispatch_all(commands);
    }

    fn render_navigation_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                self.navigate_previous();
            }
            if ui.button("▶").on_hover_text("Next month").clicked() {
                self.navigate_next();
            }
            if ui.button("Today").clicked() {
                self.jump_to_today();
            }
            ui.add_space(12.0);
            ui.heading(self.current_date.format("%B %Y").to_string());
        });
    }
}
