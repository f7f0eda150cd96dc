//! Game settings and preferences
//!
//! Gameplay tunables are compile-time constants (`crate::consts`); only
//! presentation preferences and the restart policy live here. Stored as JSON
//! next to the executable's working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// What happens after the ball is lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Start a fresh game on the very next tick
    #[default]
    Auto,
    /// Wait for the restart key
    OnKey,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Auto => "auto",
            RestartPolicy::OnKey => "on_key",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Restart behavior after a loss
    pub restart: RestartPolicy,
    /// Window size multiplier over the 800x450 logical resolution
    pub window_scale: f32,
    /// Present with vsync
    pub vsync: bool,
    /// Log measured frames per second once a second
    pub log_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            restart: RestartPolicy::Auto,
            window_scale: 1.0,
            vsync: true,
            log_fps: false,
        }
    }
}

impl Settings {
    /// Default settings file, relative to the working directory
    pub const FILE_NAME: &'static str = "breakout.json";

    pub const MIN_WINDOW_SCALE: f32 = 0.5;
    pub const MAX_WINDOW_SCALE: f32 = 4.0;

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.window_scale = settings.effective_window_scale();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `FILE_NAME`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Window scale clamped to a usable range (non-finite values become 1.0)
    pub fn effective_window_scale(&self) -> f32 {
        if self.window_scale.is_finite() {
            self.window_scale
                .clamp(Self::MIN_WINDOW_SCALE, Self::MAX_WINDOW_SCALE)
        } else {
            1.0
        }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
