use chrono::{Datelike, Local, NaiveDate};
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::models::settings::Settings;
use crate::services::widget::{WidgetCommand, WidgetState};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{day_names, is_weekend, month_weeks};

const HEADER_HEIGHT: f32 = 30.0;
const MIN_CELL_HEIGHT: f32 = 80.0;
const SPACING: f32 = 2.0;

/// Per-frame inputs shared by every day cell
pub(super) struct CellContext<'a> {
    pub state: &'a WidgetState,
    pub displayed_month: NaiveDate,
    pub today: NaiveDate,
    pub palette: CalendarCellPalette,
    pub interactive: bool,
    pub drop_target_enabled: bool,
    pub events_editable: bool,
}

pub struct MonthView;

impl MonthView {
    /// Draw the month containing `displayed_month` and collect the
    /// commands raised by clicks, drops and delete buttons.
    ///
    /// With `interactive` off (dialog open) the grid is drawn but raises nothing.
    pub fn show(
        ui: &mut egui::Ui,
        state: &WidgetState,
        settings: &Settings,
        displayed_month: NaiveDate,
        theme: &CalendarTheme,
        interactive: bool,
    ) -> Vec<WidgetCommand> {
        let mut commands = Vec::new();
        let palette = CalendarCellPalette::from_theme(theme);

        // Hidden weekends drop whole columns, like the grid's weekends option
        let columns: Vec<usize> = (0..7)
            .filter(|&column| {
                settings.weekends_visible || !Self::column_is_weekend(column, settings)
            })
            .collect();
        let weeks = month_weeks(displayed_month, settings.first_day_of_week);

        let available = ui.available_size();
        let col_count = columns.len() as f32;
        let col_width = (available.x - SPACING * (col_count - 1.0)) / col_count;
        let rows = weeks.len() as f32;
        let cell_height = ((available.y - HEADER_HEIGHT - SPACING * rows) / rows).max(MIN_CELL_HEIGHT);

        let total = Vec2::new(
            available.x,
            HEADER_HEIGHT + SPACING + rows * (cell_height + SPACING),
        );
        let (grid_rect, _) = ui.allocate_exact_size(total, Sense::hover());

        // Day of week headers
        let names = day_names(settings.first_day_of_week);
        for (slot, &column) in columns.iter().enumerate() {
            let rect = Rect::from_min_size(
                Pos2::new(grid_rect.left() + slot as f32 * (col_width + SPACING), grid_rect.top()),
                Vec2::new(col_width, HEADER_HEIGHT),
            );
            ui.painter().rect_filled(rect, 6.0, palette.header_bg);
            ui.painter()
                .rect_stroke(rect, 6.0, Stroke::new(1.0, palette.border));
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                names[column],
                FontId::proportional(14.0),
                palette.header_text,
            );
        }

        let cells = CellContext {
            state,
            displayed_month,
            today: Local::now().date_naive(),
            palette,
            interactive,
            drop_target_enabled: settings.drop_target_enabled,
            events_editable: settings.events_editable,
        };

        let body_top = grid_rect.top() + HEADER_HEIGHT + SPACING;
        for (row, week) in weeks.iter().enumerate() {
            for (slot, &column) in columns.iter().enumerate() {
                let rect = Rect::from_min_size(
                    Pos2::new(
                        grid_rect.left() + slot as f32 * (col_width + SPACING),
                        body_top + row as f32 * (cell_height + SPACING),
                    ),
                    Vec2::new(col_width, cell_height),
                );
                Self::render_day_cell(ui, rect, week[column], &cells, &mut commands);
            }
        }

        commands
    }

    fn column_is_weekend(column: usize, settings: &Settings) -> bool {
        let weekday = (usize::from(settings.first_day_of_week) + column) % 7;
        weekday == 0 || weekday == 6
    }

    pub(super) fn is_in_month(date: NaiveDate, displayed_month: NaiveDate) -> bool {
        date.year() == displayed_month.year() && date.month() == displayed_month.month()
    }

    pub(super) fn is_weekend_cell(date: NaiveDate) -> bool {
        is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::test_input::{click_at, run_frame, run_script, text_rect};

    #[test]
    fn test_weekend_columns_follow_first_day() {
        let sunday_first = Settings::default();
        assert!(MonthView::column_is_weekend(0, &sunday_first));
        assert!(MonthView::column_is_weekend(6, &sunday_first));
        assert!(!MonthView::column_is_weekend(1, &sunday_first));

        let monday_first = Settings {
            first_day_of_week: 1,
            ..Settings::default()
        };
        assert!(MonthView::column_is_weekend(5, &monday_first));
        assert!(MonthView::column_is_weekend(6, &monday_first));
        assert!(!MonthView::column_is_weekend(0, &monday_first));
    }

    #[test]
    fn test_is_in_month() {
        let april = NaiveDate::from_ymd_opt(2019, 4, 15).unwrap();
        assert!(MonthView::is_in_month(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(), april));
        assert!(!MonthView::is_in_month(NaiveDate::from_ymd_opt(2019, 3, 31).unwrap(), april));
    }

    fn click_day_fifteen(interactive: bool) -> Vec<WidgetCommand> {
        let ctx = egui::Context::default();
        let state = WidgetState::seeded();
        let settings = Settings::default();
        let april = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
        let draw = |ctx: &egui::Context| {
            let mut raised = Vec::new();
            egui::CentralPanel::default().show(ctx, |ui| {
                raised = MonthView::show(
                    ui,
                    &state,
                    &settings,
                    april,
                    &CalendarTheme::light(),
                    interactive,
                );
            });
            raised
        };

        let layout = run_frame(&ctx, Vec::new(), |ctx| {
            draw(ctx);
        });
        let day_number = text_rect(&layout, "15").unwrap().center();

        let mut commands = Vec::new();
        run_script(&ctx, click_at(day_number), |ctx| commands.extend(draw(ctx)));
        commands
    }

    #[test]
    fn test_clicking_a_day_raises_date_clicked() {
        assert_eq!(
            click_day_fifteen(true),
            vec![WidgetCommand::DateClicked("2019-04-15".into())]
        );
    }

    #[test]
    fn test_show_without_interaction_raises_nothing() {
        assert!(click_day_fifteen(false).is_empty());
    }
}
