use gcode_workflow::run_headless;
use gcode_workflow_settings::PanelConfig;
use gcode_workflow_ui::WorkflowButton;

#[tokio::test]
async fn test_headless_without_file_only_allows_upload() {
    let toolbar = run_headless(&PanelConfig::default(), None).await;

    assert!(toolbar.is_enabled(WorkflowButton::Upload));
    assert!(!toolbar.is_enabled(WorkflowButton::Run));
    assert!(!toolbar.is_enabled(WorkflowButton::Close));
}

#[tokio::test]
async fn test_headless_load_enables_run_and_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contour.gcode");
    std::fs::write(&path, "G21\nG0 X0 Y0\nG1 X20 F300\n").unwrap();

    let toolbar = run_headless(&PanelConfig::default(), Some(&path)).await;

    assert!(toolbar.is_enabled(WorkflowButton::Run));
    assert!(toolbar.is_enabled(WorkflowButton::Close));
    assert!(!toolbar.is_enabled(WorkflowButton::Pause));
    assert!(!toolbar.is_enabled(WorkflowButton::Stop));
}

#[tokio::test]
async fn test_headless_loads_file_outside_picker_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contour.gcode");
    std::fs::write(&path, "G0 X0\n").unwrap();

    let mut config = PanelConfig::default();
    config.file_picker.accepted_extensions = vec!["ngc".to_string()];
    let toolbar = run_headless(&config, Some(&path)).await;

    assert!(toolbar.is_enabled(WorkflowButton::Run));
}

#[tokio::test]
async fn test_headless_missing_file_keeps_run_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.nc");

    let toolbar = run_headless(&PanelConfig::default(), Some(&path)).await;

    assert!(toolbar.is_enabled(WorkflowButton::Upload));
    assert!(!toolbar.is_enabled(WorkflowButton::Run));
}
