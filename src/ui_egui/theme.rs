//! Theme module for the egui calendar application
//!
//! Defines the CalendarTheme color set and how it maps onto egui visuals.

use crate::models::settings::Settings;
use egui::Color32;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Day cell background for days outside the displayed month
    pub other_month_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color, also used for drop highlights
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Weekday header strip
    pub header_background: Color32,
    pub header_text: Color32,

    /// Event chip fill and label
    pub event_background: Color32,
    pub event_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (fill days, overflow indicator)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            other_month_background: Color32::from_rgb(238, 238, 240),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(232, 236, 244),
            header_text: Color32::from_rgb(60, 60, 70),
            event_background: Color32::from_rgb(100, 150, 200),
            event_text: Color32::WHITE,
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(140, 140, 140),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            other_month_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 50, 58),
            header_text: Color32::from_rgb(220, 220, 230),
            event_background: Color32::from_rgb(70, 110, 160),
            event_text: Color32::from_rgb(245, 245, 245),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(130, 130, 130),
        }
    }

    /// Theme named by the settings; "system" follows the OS preference
    pub fn from_settings(settings: &Settings) -> Self {
        let dark = match settings.theme.as_str() {
            "dark" => true,
            "system" => matches!(dark_light::detect(), dark_light::Mode::Dark),
            _ => false,
        };
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
