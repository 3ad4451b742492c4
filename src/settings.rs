//! Game settings and preferences
//!
//! Persisted as JSON next to the working directory. A missing file is
//! replaced with defaults on first run; a malformed one is ignored.

use serde::{Deserialize, Serialize};

/// Presentation preferences. Gameplay constants are fixed in
/// [`crate::consts`]; only how the court looks is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Swapchain vsync (AutoVsync when true, AutoNoVsync otherwise)
    pub vsync: bool,
    /// RGBA clear color
    pub background_color: [f32; 4],
    pub paddle_color: [f32; 4],
    pub ball_color: [f32; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: true,
            background_color: [0.1, 0.1, 0.1, 1.0],
            paddle_color: [0.9, 0.9, 0.9, 1.0],
            ball_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl Settings {
    const SETTINGS_PATH: &'static str = "duo-pong-settings.json";

    /// Load settings from disk, writing defaults on first run.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::SETTINGS_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::SETTINGS_PATH);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                let settings = Self::default();
                settings.save();
                settings
            }
        }
    }

    /// Save settings to disk. Failure is logged, not fatal.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::SETTINGS_PATH, json) {
                    log::warn!("Failed to save settings: {e}");
                } else {
                    log::info!("Settings saved to {}", Self::SETTINGS_PATH);
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_opaque_colors() {
        let settings = Settings::default();
        assert_eq!(settings.background_color[3], 1.0);
        assert_eq!(settings.paddle_color[3], 1.0);
        assert_eq!(settings.ball_color[3], 1.0);
        assert!(settings.vsync);
    }
}
