//! Status vocabularies consumed by the workflow control panel
//!
//! This module provides:
//! - Connection type (only WIFI is semantically checked)
//! - The two legacy workflow vocabularies: device-side `WorkflowStatus`
//!   and client-side `WorkflowState`
//! - `WorkflowPhase`, the canonical phase both vocabularies map onto
//! - Upload and render progress of the loaded G-code

pub mod inputs;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use inputs::{PanelInputs, RawGcodeState, RawPanelInputs, RawPanelState};

/// Transport used to reach the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Device reached over WIFI; its own status report is authoritative
    Wifi,
    /// Serial/USB connection
    Serial,
    /// Any other transport
    #[serde(other)]
    Other,
}

impl ConnectionType {
    /// Whether the device-side status vocabulary is authoritative
    pub fn is_wifi(&self) -> bool {
        matches!(self, ConnectionType::Wifi)
    }
}

impl From<&str> for ConnectionType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "wifi" => Self::Wifi,
            "serial" => Self::Serial,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wifi => write!(f, "wifi"),
            Self::Serial => write!(f, "serial"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Workflow status as reported by a WIFI-connected device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkflowStatus {
    /// Device is idle
    Idle,
    /// Device is executing a job
    Running,
    /// Job paused on the device
    Paused,
    /// Device has not reported a status yet
    Unknown,
}

impl FromStr for WorkflowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDLE" => Ok(Self::Idle),
            "RUNNING" => Ok(Self::Running),
            "PAUSED" => Ok(Self::Paused),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(format!("Unknown workflow status: {}", s)),
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Running => write!(f, "RUNNING"),
            Self::Paused => write!(f, "PAUSED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Workflow state tracked by the client application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    /// No job running
    Idle,
    /// Job streaming to the machine
    Running,
    /// Streaming paused
    Paused,
    /// Client has not determined its state
    Unknown,
}

impl FromStr for WorkflowState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "running" => Ok(Self::Running),
            "paused" => Ok(Self::Paused),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown workflow state: {}", s)),
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Paused => write!(f, "paused"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Canonical workflow phase
///
/// Both legacy vocabularies collapse onto this type so that enablement
/// rules are written once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowPhase {
    /// Ready for a new job
    Idle,
    /// Job in progress
    Running,
    /// Job paused, awaiting resume or stop
    Paused,
    /// Phase not yet reported
    Unknown,
}

impl WorkflowPhase {
    /// Phases in which a new file may be loaded or the current one closed
    pub fn accepts_new_job(&self) -> bool {
        matches!(self, WorkflowPhase::Idle | WorkflowPhase::Unknown)
    }

    /// Check if a job is actively running
    pub fn is_running(&self) -> bool {
        matches!(self, WorkflowPhase::Running)
    }

    /// Check if a job is paused
    pub fn is_paused(&self) -> bool {
        matches!(self, WorkflowPhase::Paused)
    }
}

impl From<WorkflowStatus> for WorkflowPhase {
    fn from(status: WorkflowStatus) -> Self {
        match status {
            WorkflowStatus::Idle => Self::Idle,
            WorkflowStatus::Running => Self::Running,
            WorkflowStatus::Paused => Self::Paused,
            WorkflowStatus::Unknown => Self::Unknown,
        }
    }
}

impl From<WorkflowState> for WorkflowPhase {
    fn from(state: WorkflowState) -> Self {
        match state {
            WorkflowState::Idle => Self::Idle,
            WorkflowState::Running => Self::Running,
            WorkflowState::Paused => Self::Paused,
            WorkflowState::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Transfer progress of the current G-code to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    /// Nothing transferred
    #[default]
    Idle,
    /// Transfer in progress
    Uploading,
    /// G-code is on the controller
    Uploaded,
    /// Unrecognized state
    #[serde(other)]
    Unknown,
}

impl From<&str> for UploadState {
    fn from(s: &str) -> Self {
        match s {
            "idle" => Self::Idle,
            "uploading" => Self::Uploading,
            "uploaded" => Self::Uploaded,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Uploading => write!(f, "uploading"),
            Self::Uploaded => write!(f, "uploaded"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Visualization progress of the loaded G-code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    /// Nothing loaded
    #[default]
    Idle,
    /// Renderer still processing
    Rendering,
    /// Preview complete
    Rendered,
    /// Unrecognized state
    #[serde(other)]
    Unknown,
}

impl From<&str> for RenderState {
    fn from(s: &str) -> Self {
        match s {
            "idle" => Self::Idle,
            "rendering" => Self::Rendering,
            "rendered" => Self::Rendered,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Rendering => write!(f, "rendering"),
            Self::Rendered => write!(f, "rendered"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
