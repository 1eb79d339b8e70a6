mod lifecycle;
mod shortcuts;
mod top_bar;

use crate::models::settings::Settings;
use crate::services::calendar::{CalendarState, Command, CommandOutcome};
use crate::services::settings::SettingsService;
use crate::ui_egui::day_agenda::render_day_agenda;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogAction};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::MonthView;
use chrono::NaiveDate;

pub struct CalendarApp {
    /// Event store, displayed month and dialog lifecycle
    state: CalendarState,
    settings: Settings,
    /// Where settings are written back; `None` when no config dir exists
    settings_service: Option<SettingsService>,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Day listed in the agenda window after a "+N more" click
    agenda_day: Option<NaiveDate>,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.capture_window_size(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let interactive = !self.state.dialog.is_open();
            let result = MonthView::show(
                ui,
                &self.state,
                &self.settings,
                &self.active_theme,
                interactive,
            );
            for command in result.commands {
                self.dispatch(command);
            }
            if let Some(date) = result.expand_day {
                self.agenda_day = Some(date);
            }
        });

        self.render_day_agenda(ctx);
        self.render_event_dialog(ctx);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl CalendarApp {
    /// Apply a command to the calendar state. Re-rendering picks up the new
    /// state on the next frame.
    fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let opens_dialog = matches!(
            command,
            Command::OpenCreate { .. } | Command::OpenEdit { .. }
        );
        let outcome = self.state.apply(command);
        if opens_dialog && outcome == CommandOutcome::ViewChanged {
            self.agenda_day = None;
        }
        outcome
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.dialog.is_open() {
            return;
        }

        match render_event_dialog(ctx, &mut self.state.dialog) {
            EventDialogAction::None => {}
            EventDialogAction::Save => {
                if let (Some(draft), Some(target)) =
                    (self.state.dialog.draft().cloned(), self.state.dialog.target())
                {
                    self.dispatch(Command::Save { draft, target });
                }
            }
            EventDialogAction::Cancel => {
                self.dispatch(Command::Cancel);
            }
        }
    }

    fn render_day_agenda(&mut self, ctx: &egui::Context) {
        let Some(date) = self.agenda_day else {
            return;
        };

        let mut open = true;
        let picked = {
            let events = self.state.store.bucket(date);
            render_day_agenda(ctx, date, &events, &mut open)
        };
        if !open {
            self.agenda_day = None;
        }
        if let Some(command) = picked {
            self.dispatch(command);
        }
    }

    fn capture_window_size(&mut self, ctx: &egui::Context) {
        if let Some(inner) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = inner.width();
            self.settings.window_height = inner.height();
        }
    }
}
