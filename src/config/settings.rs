//! Display preferences
//!
//! These control how the chart looks, never what it shows: the visible window
//! always starts from the data and is not saved between runs.
//!
//! Preferences are read from a TOML file, either the one passed with
//! `--config` or `settings.toml` in the platform config directory:
//!
//! - **Linux**: `~/.config/csvplot-rs/settings.toml`
//! - **macOS**: `~/Library/Application Support/csvplot-rs/settings.toml`
//! - **Windows**: `%APPDATA%\csvplot-rs\settings.toml`
//!
//! ```toml
//! line_width = 2.0
//! marker_radius = 3.0
//! dark_mode = false
//! ```

use super::{APP_ID, DEFAULT_HIT_RADIUS_PX, SETTINGS_FILE};
use crate::error::{CsvPlotError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Chart appearance preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Line width for all series
    pub line_width: f32,
    /// Radius of the point markers
    pub marker_radius: f32,
    /// Hover hit radius in screen pixels
    pub hit_radius_px: f32,
    pub show_grid: bool,
    pub show_legend: bool,
    pub dark_mode: bool,
    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            marker_radius: 2.0,
            hit_radius_px: DEFAULT_HIT_RADIUS_PX,
            show_grid: true,
            show_legend: true,
            dark_mode: true,
            window_size: [1200.0, 600.0],
        }
    }
}

/// Path of the preferences file in the platform config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(SETTINGS_FILE))
}

impl DisplaySettings {
    /// Load preferences from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CsvPlotError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content).context(format!("Invalid settings in {}", path.display()))
    }

    /// Parse preferences from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CsvPlotError::Config(e.to_string()))
    }

    /// Load preferences for this run.
    ///
    /// An explicit path must load. The default location is optional: a missing
    /// file gives the defaults and a broken one is logged and ignored.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_settings_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(settings) => {
                    tracing::debug!("Loaded display settings from {:?}", path);
                    Ok(settings)
                }
                Err(e) => {
                    tracing::warn!("Ignoring display settings: {}", e);
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }
}
