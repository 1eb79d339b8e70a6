use chrono::NaiveDate;

use crate::models::event::Event;
use crate::services::calendar::Command;

/// Window listing every event of one day, opened from "+N more".
///
/// Returns the command picked from the list, if any. `open` is cleared when
/// the window is closed or a command was picked.
pub fn render_day_agenda(
    ctx: &egui::Context,
    date: NaiveDate,
    events: &[&Event],
    open: &mut bool,
) -> Option<Command> {
    let mut command = None;
    let mut window_open = *open;

    egui::Window::new(date.format("%A, %B %-d").to_string())
        .id(egui::Id::new("day_agenda"))
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if events.is_empty() {
                ui.label(egui::RichText::new("No events").weak());
            }
            for event in events {
                let text = if event.duration.is_empty() {
                    event.label()
                } else {
                    format!("{} ({})", event.label(), event.duration)
                };
                if ui
                    .selectable_label(false, text)
                    .on_hover_text("Click to edit")
                    .clicked()
                {
                    command = Some(Command::OpenEdit { id: event.id });
                }
            }

            ui.separator();
            if ui.button("Add event").clicked() {
                command = Some(Command::OpenCreate { date });
            }
        });

    *open = window_open && command.is_none();
    command
}
