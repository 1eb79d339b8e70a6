use chrono::NaiveDate;
use egui::{Margin, Stroke, Vec2};

use super::month_day_cell::CellLayout;
use super::palette::{CalendarCellPalette, DayStripPalette};
use crate::models::settings::Settings;
use crate::services::calendar::{CalendarState, Command};
use crate::ui_egui::drag::DragManager;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::grid_range;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const HEADER_HEIGHT: f32 = 30.0;
const MIN_CELL_HEIGHT: f32 = 80.0;
const GRID_SPACING: f32 = 2.0;

/// What the month view asks the app to do after a frame
#[derive(Debug, Default)]
pub struct MonthViewResult {
    pub commands: Vec<Command>,
    /// "+N more" was clicked for this day
    pub expand_day: Option<NaiveDate>,
}

pub struct MonthView;

impl MonthView {
    /// Render the month containing `state.selected_month`.
    ///
    /// With `interactive` off (dialog open) cells only react to hover.
    pub fn show(
        ui: &mut egui::Ui,
        state: &CalendarState,
        settings: &Settings,
        theme: &CalendarTheme,
        interactive: bool,
    ) -> MonthViewResult {
        let mut result = MonthViewResult::default();
        let days = grid_range(state.selected_month);
        let weeks = (days.len() / 7).max(1);

        let col_width = (ui.available_width() - GRID_SPACING * 6.0) / 7.0;
        Self::render_weekday_header(ui, theme, col_width);

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        let row_height = ((ui.available_height() - GRID_SPACING * (weeks as f32 - 1.0))
            / weeks as f32)
            .max(MIN_CELL_HEIGHT);
        let layout = CellLayout {
            size: Vec2::new(col_width, row_height),
            max_visible_events: settings.max_visible_events.max(1),
            palette: CalendarCellPalette::from_theme(theme),
            interactive,
        };

        let grid = egui::Grid::new("month_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for week in days.chunks(7) {
                    for day in week {
                        let events = state.store.bucket(day.date);
                        Self::render_day_cell(ui, day, &events, &layout, &mut result);
                    }
                    ui.end_row();
                }
            });

        let ctx = ui.ctx().clone();
        if let Some(drag) = DragManager::active(&ctx) {
            let pointer = ctx.pointer_interact_pos();
            if pointer.map_or(true, |pos| !grid.response.rect.contains(pos)) {
                DragManager::clear_hover(&ctx);
            }

            if ctx.input(|i| i.pointer.any_released()) {
                // released without reaching the source cell's drag_stopped
                log::debug!("Drag of event {} abandoned", drag.event_id);
                DragManager::cancel(&ctx);
            } else {
                Self::paint_drag_ghost(&ctx, &layout, col_width);
            }
        }

        result
    }

    fn render_weekday_header(ui: &mut egui::Ui, theme: &CalendarTheme, col_width: f32) {
        let strip = DayStripPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for day in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(strip.header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, strip.strip_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(strip.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });
    }

    /// Chip following the pointer while an event is dragged
    fn paint_drag_ghost(ctx: &egui::Context, layout: &CellLayout, col_width: f32) {
        let Some(drag) = DragManager::active(ctx) else {
            return;
        };
        let Some(pointer) = ctx.pointer_interact_pos().or(drag.pointer_pos) else {
            return;
        };

        let ghost = egui::Rect::from_min_size(
            pointer - drag.pointer_offset,
            Vec2::new(col_width - 6.0, 16.0),
        );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("calendar_drag_ghost"),
        ));
        painter.rect_filled(ghost, 2.0, layout.palette.event_bg.gamma_multiply(0.85));
        painter.text(
            egui::Pos2::new(ghost.left() + 3.0, ghost.center().y),
            egui::Align2::LEFT_CENTER,
            &drag.label,
            egui::FontId::proportional(11.0),
            layout.palette.event_text,
        );
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        ctx.request_repaint();
    }
}
