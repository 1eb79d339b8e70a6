use super::CalendarApp;
use crate::services::calendar::Command;
use crate::ui_egui::drag::DragManager;
use chrono::Local;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let dialog_open = self.state.dialog.is_open();
        let text_focused = ctx.memory(|mem| mem.focused().is_some());
        let mut commands = Vec::new();

        // read input first; the context lock must not be held while dispatching
        let escape = ctx.input(|i| {
            if !dialog_open {
                if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                    commands.push(Command::OpenCreate {
                        date: Local::now().date_naive(),
                    });
                }

                if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                    commands.push(Command::Today);
                }

                if !text_focused {
                    if i.key_pressed(egui::Key::ArrowLeft) {
                        commands.push(Command::Navigate { delta: -1 });
                    }
                    if i.key_pressed(egui::Key::ArrowRight) {
                        commands.push(Command::Navigate { delta: 1 });
                    }
                }
            }

            i.key_pressed(egui::Key::Escape)
        });

        if escape {
            if dialog_open {
                commands.push(Command::Cancel);
            } else if self.agenda_day.is_some() {
                self.agenda_day = None;
            } else if DragManager::is_active(ctx) {
                DragManager::cancel(ctx);
            }
        }

        for command in commands {
            self.dispatch(command);
        }
    }
}
