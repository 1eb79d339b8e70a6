//! Day cell rendering for the month view.
//!
//! Paints one grid day with its event chips and the "+N more" indicator, and
//! turns clicks, double-clicks and drags on it into calendar commands.

use chrono::Datelike;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, MonthViewResult};
use super::overflow_label;
use super::palette::CalendarCellPalette;
use crate::models::event::Event;
use crate::services::calendar::Command;
use crate::ui_egui::drag::{DragContext, DragManager};
use crate::utils::date::GridDay;

const CHIP_HEIGHT: f32 = 16.0;
const CHIP_STRIDE: f32 = 18.0;
const FIRST_CHIP_OFFSET: f32 = 24.0;

/// Shared per-frame settings for every cell in the grid
pub(super) struct CellLayout {
    pub size: Vec2,
    pub max_visible_events: usize,
    pub palette: CalendarCellPalette,
    pub interactive: bool,
}

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        day: &GridDay,
        events: &[&Event],
        layout: &CellLayout,
        result: &mut MonthViewResult,
    ) {
        let palette = layout.palette;
        let sense = if layout.interactive {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(layout.size, sense);
        let dragging = DragManager::active(ui.ctx());

        // Background
        let bg_color = if day.is_today {
            palette.today_bg
        } else if !day.in_month {
            palette.other_month_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Border
        let border_color = if day.is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        if layout.interactive && response.hovered() && dragging.is_none() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        let date_color = if day.in_month {
            palette.text
        } else {
            palette.other_month_text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            day.date.day().to_string(),
            egui::FontId::proportional(14.0),
            date_color,
        );

        // Event chips, in bucket order, up to the display cap
        let chip_fill = if events.len() > 1 {
            palette.overlap_event_bg
        } else {
            palette.event_bg
        };
        let font_id = egui::FontId::proportional(11.0);
        let mut event_hitboxes: Vec<(Rect, usize)> = Vec::new();
        let mut y_offset = FIRST_CHIP_OFFSET;

        for (index, &event) in events.iter().take(layout.max_visible_events).enumerate() {
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            if chip_rect.bottom() > rect.bottom() {
                break;
            }

            let being_dragged = dragging
                .as_ref()
                .is_some_and(|drag| drag.event_id == event.id);
            let fill = if being_dragged {
                chip_fill.gamma_multiply(0.4)
            } else {
                chip_fill
            };
            ui.painter().rect_filled(chip_rect, 2.0, fill);

            let label = Self::truncate_single_line_to_width(
                ui,
                &event.label(),
                &font_id,
                palette.event_text,
                chip_rect.width() - 6.0,
            );
            ui.painter().text(
                Pos2::new(chip_rect.left() + 3.0, chip_rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                font_id.clone(),
                palette.event_text,
            );

            event_hitboxes.push((chip_rect, index));
            y_offset += CHIP_STRIDE;
        }

        // "+N more"
        let hidden_from = event_hitboxes.len();
        let more_rect = overflow_label(events.len(), hidden_from).map(|text| {
            let more_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, 14.0),
            );
            ui.painter().text(
                Pos2::new(more_rect.left() + 2.0, more_rect.top()),
                egui::Align2::LEFT_TOP,
                text,
                egui::FontId::proportional(10.0),
                palette.overflow_text,
            );
            more_rect
        });

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        let hit_at = |pos: Pos2| {
            event_hitboxes
                .iter()
                .find(|(hit_rect, _)| hit_rect.contains(pos))
                .copied()
        };
        let pointer_hit = pointer_pos.and_then(hit_at);
        let more_hovered = matches!((pointer_pos, more_rect), (Some(pos), Some(r)) if r.contains(pos));

        // Drop tracking
        let pointer_for_hover = ui
            .ctx()
            .pointer_interact_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        if let Some(pointer) = pointer_for_hover {
            if rect.contains(pointer) && dragging.is_some() {
                DragManager::update_hover(ui.ctx(), day.date, rect, pointer);
                ui.ctx().request_repaint();
            }
        }
        if let Some(drag) = DragManager::active(ui.ctx()) {
            if drag.drop_target() == Some(day.date) {
                let highlight = rect.shrink2(Vec2::new(2.0, 2.0));
                ui.painter().rect_filled(highlight, 2.0, palette.drop_fill);
                ui.painter()
                    .rect_stroke(highlight, 2.0, Stroke::new(1.5, palette.drop_border));
            }
        }

        // Tooltips
        if response.hovered() && dragging.is_none() {
            if let Some((hit_rect, index)) = pointer_hit {
                ui.painter().rect_stroke(
                    hit_rect.expand(1.0),
                    3.0,
                    Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
                );
                if layout.interactive {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                response.clone().on_hover_text_at_pointer(events[index].tooltip());
            } else if more_hovered {
                response.clone().on_hover_ui_at_pointer(|ui| {
                    ui.label(egui::RichText::new("Hidden events:").strong());
                    for event in events.iter().skip(hidden_from) {
                        ui.label(format!("• {}", event.label()));
                    }
                    ui.label(egui::RichText::new("\nClick to list the day").small().weak());
                });
            } else if layout.interactive {
                response
                    .clone()
                    .on_hover_text_at_pointer("Double-click to add an event");
            }
        }

        if !layout.interactive {
            return;
        }

        if response.drag_started() {
            let press_origin = ui.input(|i| i.pointer.press_origin());
            if let Some(origin) = press_origin {
                if let Some((hit_rect, index)) = hit_at(origin) {
                    DragManager::begin(
                        ui.ctx(),
                        DragContext::from_event(events[index], index, origin - hit_rect.min),
                    );
                }
            }
        }

        if response.drag_stopped() {
            if let Some(drag) = DragManager::finish(ui.ctx()) {
                if let Some(dest) = drag.drop_target() {
                    result.commands.push(Command::Move {
                        id: drag.event_id,
                        new_date: dest,
                    });
                }
            }
            return;
        }

        if response.double_clicked() && pointer_hit.is_none() && !more_hovered {
            result.commands.push(Command::OpenCreate { date: day.date });
        } else if response.clicked() {
            if let Some((_, index)) = pointer_hit {
                result.commands.push(Command::OpenEdit {
                    id: events[index].id,
                });
            } else if more_hovered {
                result.expand_day = Some(day.date);
            }
        }
    }
}
