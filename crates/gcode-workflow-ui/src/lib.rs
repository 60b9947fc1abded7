//! # GCode Workflow UI
//!
//! Workflow control toolbar: a toolkit-independent model plus, with the
//! `gtk` feature, a GTK4 view and application window.

#[cfg(feature = "gtk")]
pub mod gtk_app;
pub mod ui;

pub use ui::local_host::{LoadedProgram, LocalHost};
pub use ui::workflow_control::{
    ButtonGroup, ClickOutcome, FileInput, SelectOutcome, ToolbarState, WorkflowButton,
    WorkflowControl,
};
