//! Stand-in host for running the panel without a machine controller
//!
//! Applies panel commands to its own `PanelInputs` the way a real host
//! would after its controller acknowledged them: loaded files count as
//! rendered and uploaded immediately, and transport commands move the
//! client-side workflow state.

use gcode_workflow_core::{
    ConnectionType, PanelInputs, RenderState, UploadState, WorkflowCommand, WorkflowState,
};
use tracing::info;

/// Program currently loaded into the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProgram {
    pub name: String,
    pub line_count: usize,
}

#[derive(Debug, Clone)]
pub struct LocalHost {
    inputs: PanelInputs,
    program: Option<LoadedProgram>,
}

impl LocalHost {
    pub fn new(is_connected: bool) -> Self {
        Self {
            inputs: PanelInputs {
                connection_type: Some(ConnectionType::Serial),
                workflow_state: Some(WorkflowState::Idle),
                is_connected,
                ..Default::default()
            },
            program: None,
        }
    }

    pub fn inputs(&self) -> PanelInputs {
        self.inputs
    }

    pub fn program(&self) -> Option<&LoadedProgram> {
        self.program.as_ref()
    }

    /// Apply one command and return the inputs for the next panel update
    pub fn apply(&mut self, command: &WorkflowCommand) -> PanelInputs {
        info!("Host received: {}", command);
        match command {
            WorkflowCommand::UploadGcodeFile(_) => {
                self.inputs.render_state = RenderState::Rendering;
                self.inputs.upload_state = UploadState::Uploading;
            }
            WorkflowCommand::AddGcode { name, content } => {
                self.program = Some(LoadedProgram {
                    name: name.clone(),
                    line_count: content.lines().count(),
                });
                self.inputs.render_state = RenderState::Rendered;
                self.inputs.upload_state = UploadState::Uploaded;
            }
            WorkflowCommand::Run => self.inputs.workflow_state = Some(WorkflowState::Running),
            WorkflowCommand::Pause => self.inputs.workflow_state = Some(WorkflowState::Paused),
            WorkflowCommand::Stop => self.inputs.workflow_state = Some(WorkflowState::Idle),
            WorkflowCommand::Close => {
                self.program = None;
                self.inputs.render_state = RenderState::Idle;
                self.inputs.upload_state = UploadState::Idle;
            }
        }
        self.inputs
    }
}

impl Default for LocalHost {
    fn default() -> Self {
        Self::new(true)
    }
}
