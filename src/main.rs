// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions), feature = "gtk"),
    windows_subsystem = "windows"
)]

use gcode_workflow::{init_logging, load_config, BUILD_DATE, VERSION};
use gcode_workflow_settings::PanelConfig;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let file = std::env::args_os().nth(1).map(PathBuf::from);

    // Settings pick the default log level, so they are read before logging is up.
    let loaded = load_config();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level)?;
    tracing::info!("gcode-workflow {} (built {})", VERSION, BUILD_DATE);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("{:#}; using default settings", e);
        PanelConfig::default()
    });

    let runtime = tokio::runtime::Runtime::new()?;

    #[cfg(feature = "gtk")]
    {
        let _guard = runtime.enter();
        if file.is_some() {
            tracing::warn!("File arguments are ignored in GTK mode; use the Upload button");
        }
        gcode_workflow_ui::gtk_app::main(config);
    }

    #[cfg(not(feature = "gtk"))]
    {
        runtime.block_on(gcode_workflow::run_headless(&config, file.as_deref()));
    }

    Ok(())
}
