mod app;
mod day_agenda;
pub mod drag;
mod event_dialog;
pub mod theme;
mod views;

pub use app::CalendarApp;
