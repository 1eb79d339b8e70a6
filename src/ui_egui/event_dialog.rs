use egui::{RichText, TextEdit};

use crate::services::calendar::DialogState;

const FIELD_WIDTH: f32 = 260.0;

/// What the user did in the event dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDialogAction {
    None,
    Save,
    Cancel,
}

/// Render the create/edit dialog for an open [`DialogState`].
///
/// Field edits go straight into the dialog's draft; saving and cancelling are
/// reported back so the caller can dispatch the matching command.
pub fn render_event_dialog(ctx: &egui::Context, dialog: &mut DialogState) -> EventDialogAction {
    let heading = dialog.heading();
    let date_label = dialog
        .target()
        .map(|target| target.date().format("%A, %B %-d, %Y").to_string());
    let Some(draft) = dialog.draft_mut() else {
        return EventDialogAction::None;
    };

    let mut action = EventDialogAction::None;

    egui::Window::new(heading)
        .id(egui::Id::new("event_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(label) = &date_label {
                ui.label(RichText::new(label).weak());
                ui.add_space(6.0);
            }

            let title = ui.add(
                TextEdit::singleline(&mut draft.title)
                    .hint_text("Title")
                    .desired_width(FIELD_WIDTH),
            );
            if ui.memory(|mem| mem.focused().is_none()) {
                title.request_focus();
            }
            ui.add(
                TextEdit::singleline(&mut draft.time)
                    .hint_text("Time (e.g. 10:30)")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add(
                TextEdit::singleline(&mut draft.duration)
                    .hint_text("Duration (e.g. 1h)")
                    .desired_width(FIELD_WIDTH),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = EventDialogAction::Save;
                }
                if ui.button("Cancel").clicked() {
                    action = EventDialogAction::Cancel;
                }
            });
        });

    if action == EventDialogAction::None && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        action = EventDialogAction::Save;
    }

    action
}
