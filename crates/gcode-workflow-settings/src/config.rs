//! Configuration for the workflow control panel
//!
//! Settings are stored as JSON or TOML (chosen by file extension) in the
//! platform config directory. Every section has defaults, so a missing
//! file or a partial one is not an error.

use gcode_workflow_core::{FileIntake, DEFAULT_ACCEPTED_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR_NAME: &str = "gcode-workflow";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Hidden file picker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePickerSettings {
    /// Extensions offered by the picker, without leading dots
    pub accepted_extensions: Vec<String>,
    /// Title of the picker dialog
    pub dialog_title: String,
}

impl Default for FilePickerSettings {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            dialog_title: "Upload G-code".to_string(),
        }
    }
}

/// Toolbar appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarSettings {
    /// Show text next to the Run/Pause/Stop/Close icons
    pub show_labels: bool,
    /// Icon size in pixels
    pub icon_size: i32,
}

impl Default for ToolbarSettings {
    fn default() -> Self {
        Self {
            show_labels: false,
            icon_size: 16,
        }
    }
}

/// Logging defaults, overridden by `RUST_LOG`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. `info` or `gcode_workflow_core=debug`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub file_picker: FilePickerSettings,
    pub toolbar: ToolbarSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory for this application
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Default location of the config file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration; the format follows the file extension
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let usable = self
            .file_picker
            .accepted_extensions
            .iter()
            .any(|e| !e.trim().trim_start_matches('.').is_empty());
        if !usable {
            return Err(SettingsError::InvalidSetting {
                key: "file_picker.accepted_extensions".to_string(),
                reason: "at least one extension is required".to_string(),
            });
        }

        if self.toolbar.icon_size <= 0 {
            return Err(SettingsError::InvalidSetting {
                key: "toolbar.icon_size".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }

    /// File intake configured with the accepted extensions
    pub fn file_intake(&self) -> FileIntake {
        FileIntake::new(&self.file_picker.accepted_extensions)
    }
}
