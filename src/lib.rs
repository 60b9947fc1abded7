//! # GCode Workflow
//!
//! Workflow control panel for CNC and 3D-printer G-code jobs.
//!
//! ## Architecture
//!
//! The workspace is split into three crates:
//!
//! 1. **gcode-workflow-core** - Status vocabularies, enablement resolver, actions, file intake
//! 2. **gcode-workflow-settings** - Panel configuration (JSON/TOML)
//! 3. **gcode-workflow-ui** - Toolbar model and the optional GTK view
//!
//! This crate ties them together into the `gcode-workflow` binary.

use anyhow::Context;
use std::path::Path;

use gcode_workflow_core::CommandDispatcher;
use gcode_workflow_settings::PanelConfig;
use gcode_workflow_ui::{ClickOutcome, LocalHost, SelectOutcome, WorkflowButton, WorkflowControl};
use tracing::{info, warn};

pub use gcode_workflow_core::{
    ControlAvailability, FileIntake, GcodeFile, IntakeError, IntakeOutcome, PanelInputs,
    RawPanelInputs, WorkflowActions, WorkflowCommand, WorkflowPhase,
};
pub use gcode_workflow_ui::ToolbarState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Load the panel settings from the platform config directory
///
/// A missing file yields the defaults.
pub fn load_config() -> anyhow::Result<PanelConfig> {
    let path = PanelConfig::config_file_path()?;
    let config = PanelConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    Ok(config)
}

/// Drive the panel without a window
///
/// Loads `file` (if given) through the Upload button and a [`LocalHost`],
/// then returns the resulting toolbar state.
pub async fn run_headless(config: &PanelConfig, file: Option<&Path>) -> ToolbarState {
    let dispatcher = CommandDispatcher::default();
    let mut commands = dispatcher.subscribe();
    let mut control = WorkflowControl::new(dispatcher, config.file_intake());
    let mut host = LocalHost::default();

    let mut toolbar = control.update(host.inputs());
    info!("Toolbar: {}", toolbar);

    let Some(file) = file else {
        return toolbar;
    };

    if control.click(WorkflowButton::Upload) != ClickOutcome::OpenFilePicker {
        warn!("Upload is disabled; not loading {}", file.display());
        return toolbar;
    }

    if let SelectOutcome::Intake(IntakeOutcome::Loaded { name, bytes }) =
        control.select_file(file).await
    {
        info!("Loaded {} ({} bytes)", name, bytes);
    }

    while let Ok(command) = commands.try_recv() {
        toolbar = control.update(host.apply(&command));
    }
    info!("Toolbar: {}", toolbar);
    toolbar
}
