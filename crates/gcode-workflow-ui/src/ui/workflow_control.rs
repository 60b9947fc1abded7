//! Workflow control toolbar
//!
//! Headless model of the Upload / Run / Pause / Stop / Close toolbar and
//! its hidden single-file picker. Views render from [`ToolbarState`] and
//! forward clicks and file selections to [`WorkflowControl`].

use gcode_workflow_core::{
    ControlAvailability, FileIntake, GcodeFile, IntakeOutcome, PanelInputs, WorkflowActions,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Toolbar buttons in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowButton {
    Upload,
    Run,
    Pause,
    Stop,
    Close,
}

/// Visual grouping of toolbar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonGroup {
    /// File selection
    File,
    /// Job transport controls
    Transport,
}

impl WorkflowButton {
    pub const ALL: [WorkflowButton; 5] = [
        WorkflowButton::Upload,
        WorkflowButton::Run,
        WorkflowButton::Pause,
        WorkflowButton::Stop,
        WorkflowButton::Close,
    ];

    /// Label, also used as the tooltip
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowButton::Upload => "Upload G-code",
            WorkflowButton::Run => "Run",
            WorkflowButton::Pause => "Pause",
            WorkflowButton::Stop => "Stop",
            WorkflowButton::Close => "Close",
        }
    }

    /// Freedesktop icon name
    pub fn icon_name(&self) -> &'static str {
        match self {
            WorkflowButton::Upload => "document-open-symbolic",
            WorkflowButton::Run => "media-playback-start-symbolic",
            WorkflowButton::Pause => "media-playback-pause-symbolic",
            WorkflowButton::Stop => "media-playback-stop-symbolic",
            WorkflowButton::Close => "window-close-symbolic",
        }
    }

    pub fn group(&self) -> ButtonGroup {
        match self {
            WorkflowButton::Upload => ButtonGroup::File,
            _ => ButtonGroup::Transport,
        }
    }
}

impl std::fmt::Display for WorkflowButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Enabled state of every toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarState {
    availability: ControlAvailability,
}

impl ToolbarState {
    pub fn new(availability: ControlAvailability) -> Self {
        Self { availability }
    }

    pub fn availability(&self) -> &ControlAvailability {
        &self.availability
    }

    /// Whether the button accepts clicks
    pub fn is_enabled(&self, button: WorkflowButton) -> bool {
        let a = &self.availability;
        match button {
            WorkflowButton::Upload => a.upload_enabled(),
            WorkflowButton::Run => a.run_enabled(),
            WorkflowButton::Pause => a.pause_enabled(),
            WorkflowButton::Stop => a.stop_enabled(),
            WorkflowButton::Close => a.close_enabled(),
        }
    }

    /// Buttons in display order with their enabled flags
    pub fn buttons(&self) -> [(WorkflowButton, bool); 5] {
        WorkflowButton::ALL.map(|b| (b, self.is_enabled(b)))
    }
}

impl std::fmt::Display for ToolbarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .buttons()
            .iter()
            .map(|(b, enabled)| format!("{}={}", b, if *enabled { "on" } else { "off" }))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Hidden single-file picker
///
/// Selecting the value it already holds produces no change notification,
/// so the Upload button resets it before every opening.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    value: Option<PathBuf>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only one file is taken per selection
    pub const MULTIPLE: bool = false;

    pub fn value(&self) -> Option<&Path> {
        self.value.as_deref()
    }

    /// Clear the current value
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Store a selection; returns true when a change notification fires
    pub fn select(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if self.value.as_deref() == Some(path) {
            return false;
        }
        self.value = Some(path.to_path_buf());
        true
    }
}

/// Result of clicking a toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The view should show the file picker
    OpenFilePicker,
    /// The matching action handler was called
    Dispatched(WorkflowButton),
    /// The button is disabled
    Ignored(WorkflowButton),
}

/// Result of a file picker selection
#[derive(Debug)]
pub enum SelectOutcome {
    /// Same file as the current value; nothing happened
    Unchanged,
    /// The file went through intake
    Intake(IntakeOutcome),
}

/// Workflow control panel
///
/// Holds the host's action handlers, the latest inputs, and the hidden
/// file input. Everything else is re-derived on [`WorkflowControl::update`].
pub struct WorkflowControl<A: WorkflowActions> {
    actions: A,
    intake: FileIntake,
    inputs: PanelInputs,
    toolbar: ToolbarState,
    file_input: FileInput,
}

impl<A: WorkflowActions> WorkflowControl<A> {
    pub fn new(actions: A, intake: FileIntake) -> Self {
        let inputs = PanelInputs::default();
        Self {
            actions,
            intake,
            toolbar: ToolbarState::new(ControlAvailability::resolve(&inputs)),
            inputs,
            file_input: FileInput::new(),
        }
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn intake(&self) -> &FileIntake {
        &self.intake
    }

    pub fn inputs(&self) -> &PanelInputs {
        &self.inputs
    }

    pub fn toolbar(&self) -> ToolbarState {
        self.toolbar
    }

    pub fn file_input(&self) -> &FileInput {
        &self.file_input
    }

    /// Replace the inputs and recompute the toolbar
    pub fn update(&mut self, inputs: PanelInputs) -> ToolbarState {
        self.inputs = inputs;
        self.toolbar = ToolbarState::new(ControlAvailability::resolve(&self.inputs));
        trace!("Toolbar: {}", self.toolbar);
        self.toolbar
    }

    /// Handle a toolbar click
    pub fn click(&mut self, button: WorkflowButton) -> ClickOutcome {
        if !self.toolbar.is_enabled(button) {
            trace!("Ignoring click on disabled {} button", button);
            return ClickOutcome::Ignored(button);
        }

        debug!("{} clicked", button);
        match button {
            WorkflowButton::Upload => {
                self.file_input.reset();
                return ClickOutcome::OpenFilePicker;
            }
            WorkflowButton::Run => self.actions.handle_run(),
            WorkflowButton::Pause => self.actions.handle_pause(),
            WorkflowButton::Stop => self.actions.handle_stop(),
            WorkflowButton::Close => self.actions.handle_close(),
        }
        ClickOutcome::Dispatched(button)
    }

    /// Record a picker selection without reading it
    ///
    /// Returns the file to take in, or `None` when the selection did not
    /// change. Views that cannot hold a borrow across the read use this
    /// together with [`FileIntake::intake`].
    pub fn accept_selection(&mut self, path: impl AsRef<Path>) -> Option<GcodeFile> {
        let path = path.as_ref();
        if self.file_input.select(path) {
            Some(GcodeFile::new(path))
        } else {
            debug!("Selection unchanged: {}", path.display());
            None
        }
    }

    /// Handle a picker selection end to end
    pub async fn select_file(&mut self, path: impl AsRef<Path>) -> SelectOutcome {
        match self.accept_selection(path) {
            Some(file) => SelectOutcome::Intake(self.intake.intake(&self.actions, file).await),
            None => SelectOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcode_workflow_core::{CommandDispatcher, WorkflowCommand, WorkflowState};

    #[test]
    fn test_button_order_and_groups() {
        assert_eq!(WorkflowButton::ALL[0], WorkflowButton::Upload);
        assert_eq!(WorkflowButton::Upload.group(), ButtonGroup::File);
        assert_eq!(WorkflowButton::Close.group(), ButtonGroup::Transport);
        assert_eq!(WorkflowButton::Upload.label(), "Upload G-code");
    }

    #[test]
    fn test_file_input_reset_allows_reselect() {
        let mut input = FileInput::new();
        assert!(input.select("/jobs/a.gcode"));
        assert!(!input.select("/jobs/a.gcode"));
        assert!(input.select("/jobs/b.gcode"));

        input.reset();
        assert_eq!(input.value(), None);
        assert!(input.select("/jobs/b.gcode"));
        assert!(!FileInput::MULTIPLE);
    }

    #[test]
    fn test_disabled_click_is_ignored() {
        let dispatcher = CommandDispatcher::new(4);
        let mut rx = dispatcher.subscribe();
        let mut control = WorkflowControl::new(dispatcher, FileIntake::default());

        assert_eq!(
            control.click(WorkflowButton::Run),
            ClickOutcome::Ignored(WorkflowButton::Run)
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enabled_click_dispatches() {
        let dispatcher = CommandDispatcher::new(4);
        let mut rx = dispatcher.subscribe();
        let mut control = WorkflowControl::new(dispatcher, FileIntake::default());
        control.update(PanelInputs {
            workflow_state: Some(WorkflowState::Running),
            ..Default::default()
        });

        assert_eq!(
            control.click(WorkflowButton::Pause),
            ClickOutcome::Dispatched(WorkflowButton::Pause)
        );
        assert_eq!(rx.try_recv().unwrap(), WorkflowCommand::Pause);
    }

    #[test]
    fn test_toolbar_display() {
        let state = ToolbarState::default();
        assert_eq!(
            state.to_string(),
            "Upload G-code=off Run=off Pause=off Stop=off Close=off"
        );
    }
}
