//! # GCode Workflow Core
//!
//! Core types for the workflow control panel.
//! Provides the status vocabularies, the button-enablement resolver,
//! the action handler seam and the G-code file intake.

pub mod actions;
pub mod data;
pub mod error;
pub mod intake;
pub mod resolver;

pub use actions::{CommandDispatcher, WorkflowActions, WorkflowCommand};

pub use data::{
    ConnectionType, PanelInputs, RawGcodeState, RawPanelInputs, RawPanelState, RenderState,
    UploadState, WorkflowPhase, WorkflowState, WorkflowStatus,
};

pub use error::{IntakeError, Result};

pub use intake::{
    read_gcode_text, FileIntake, FileMetadata, GcodeFile, GcodeText, IntakeOutcome,
    DEFAULT_ACCEPTED_EXTENSIONS,
};

pub use resolver::ControlAvailability;
