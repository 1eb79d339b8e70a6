// Settings module
// User configuration stored as TOML in the platform config directory

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// Events drawn per day cell before the "+N more" indicator takes over
    pub max_visible_events: usize,
    /// Seed file loaded at startup instead of the built-in dataset
    pub seed_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            max_visible_events: 2,
            seed_path: None,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(format!(
                "Theme must be \"light\", \"dark\" or \"system\", got \"{}\"",
                self.theme
            ));
        }

        if self.max_visible_events == 0 {
            return Err("max_visible_events must be at least 1".to_string());
        }

        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window size must be at least {}x{}",
                MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ));
        }

        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme == "dark"
    }
}
