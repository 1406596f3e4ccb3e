//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::carousel::{CarouselConfig, Environment};

/// Environment variable that forces reduced motion on regardless of settings
pub const REDUCED_MOTION_ENV: &str = "KASSABI_REDUCED_MOTION";

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Carousel timing overrides
    #[serde(default)]
    pub carousel: CarouselSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Reduced motion - no autoplay, no parallax, instant transitions
    #[serde(default)]
    pub reduced_motion: bool,
    /// Touch-first pointer (disables hover parallax)
    #[serde(default)]
    pub coarse_pointer: bool,
}

/// Carousel timing settings; 0 keeps the built-in interval
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Hero autoplay interval in milliseconds
    #[serde(default)]
    pub hero_cycle_ms: u64,
    /// Showreel autoplay interval in milliseconds
    #[serde(default)]
    pub showreel_cycle_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduced_motion: false,
            coarse_pointer: false,
        }
    }
}

fn with_override(config: CarouselConfig, millis: u64) -> CarouselConfig {
    if millis == 0 {
        config
    } else {
        config.with_cycle(Duration::from_millis(millis))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kassabi", "Kassabi")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    if path.exists() {
                        tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                    }
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Environment signals handed to the carousels
    pub fn environment(&self) -> Environment {
        let forced = std::env::var(REDUCED_MOTION_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Environment {
            reduced_motion: self.display.reduced_motion || forced,
            coarse_pointer: self.display.coarse_pointer,
        }
    }

    pub fn hero_config(&self) -> CarouselConfig {
        with_override(CarouselConfig::hero(), self.carousel.hero_cycle_ms)
    }

    pub fn showreel_config(&self) -> CarouselConfig {
        with_override(CarouselConfig::showreel(), self.carousel.showreel_cycle_ms)
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
