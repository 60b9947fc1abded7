//! GCode Workflow Settings Crate
//!
//! Handles panel configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{FilePickerSettings, LoggingSettings, PanelConfig, ToolbarSettings};
pub use error::{SettingsError, SettingsResult};
