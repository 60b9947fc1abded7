pub mod file_dialog;
pub mod workflow_control;

pub use workflow_control::WorkflowControlView;
