use super::CalendarApp;
use crate::services::calendar::Command;
use crate::utils::date::month_title;

impl CalendarApp {
    pub(super) fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        let mut commands = Vec::new();

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("My Calendar");
            ui.separator();

            if ui.button("«").on_hover_text("Previous month").clicked() {
                commands.push(Command::Navigate { delta: -1 });
            }
            ui.label(
                egui::RichText::new(month_title(self.state.selected_month))
                    .size(18.0)
                    .strong(),
            );
            if ui.button("»").on_hover_text("Next month").clicked() {
                commands.push(Command::Navigate { delta: 1 });
            }
            if ui.button("Today").on_hover_text("Ctrl+T").clicked() {
                commands.push(Command::Today);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle_label = if self.active_theme.is_dark {
                    "☀ Light"
                } else {
                    "🌙 Dark"
                };
                if ui.button(toggle_label).clicked() {
                    self.toggle_theme(ui.ctx());
                }
            });
        });
        ui.add_space(4.0);

        for command in commands {
            self.dispatch(command);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = if self.active_theme.is_dark {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        log::info!("Switching to {} theme", self.settings.theme);
        self.apply_theme(ctx);
        self.persist_settings();
    }
}
