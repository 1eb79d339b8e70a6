use super::CalendarApp;
use crate::models::settings::{Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::services::calendar::CalendarState;
use crate::services::event::EventStore;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use chrono::Local;

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: EventStore,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        log::info!(
            "Starting with {} events, theme '{}', {} events per day",
            store.len(),
            settings.theme,
            settings.max_visible_events
        );

        let active_theme = CalendarTheme::from_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            state: CalendarState::new(store, Local::now().date_naive()),
            settings,
            settings_service,
            active_theme,
            agenda_day: None,
        }
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = CalendarTheme::from_settings(&self.settings);
        self.active_theme.apply_to_context(ctx);
    }

    pub(super) fn persist_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        let mut settings = self.settings.clone();
        settings.window_width = settings.window_width.max(MIN_WINDOW_WIDTH);
        settings.window_height = settings.window_height.max(MIN_WINDOW_HEIGHT);

        if let Err(err) = service.save(&settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!(
            "Shutting down with {} events in memory (not persisted)",
            self.state.store.len()
        );
        self.persist_settings();
    }
}
