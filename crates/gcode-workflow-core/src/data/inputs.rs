//! Panel inputs supplied by the host on every update
//!
//! `RawPanelInputs` mirrors the loosely typed shape hosts already produce
//! (string statuses, optional fields). It converts into `PanelInputs`, where
//! each value has been mapped onto its typed vocabulary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ConnectionType, RenderState, UploadState, WorkflowPhase, WorkflowState, WorkflowStatus};

/// Typed snapshot of everything the panel derives its state from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelInputs {
    /// Active transport, if known
    pub connection_type: Option<ConnectionType>,
    /// Device-reported status (authoritative over WIFI)
    pub workflow_status: Option<WorkflowStatus>,
    /// Client-side execution state (authoritative otherwise)
    pub workflow_state: Option<WorkflowState>,
    /// Controller transfer progress
    pub upload_state: UploadState,
    /// Preview progress
    pub render_state: RenderState,
    /// A machine is connected
    pub is_connected: bool,
    /// The server is busy with a previous request
    pub is_server_waiting: bool,
}

impl PanelInputs {
    /// Whether the device-side vocabulary is authoritative
    pub fn is_wifi(&self) -> bool {
        self.connection_type.is_some_and(|c| c.is_wifi())
    }

    /// The authoritative workflow phase for this snapshot
    ///
    /// Exactly one vocabulary is consulted, chosen by the connection type.
    pub fn phase(&self) -> Option<WorkflowPhase> {
        if self.is_wifi() {
            self.workflow_status.map(WorkflowPhase::from)
        } else {
            self.workflow_state.map(WorkflowPhase::from)
        }
    }

    /// Loaded G-code has finished rendering
    pub fn is_rendered(&self) -> bool {
        self.render_state == RenderState::Rendered
    }

    /// Loaded G-code is available to the controller
    ///
    /// WIFI devices receive the file on upload, so only non-WIFI transports
    /// consult the upload state.
    pub fn is_uploaded(&self) -> bool {
        self.is_wifi() || self.upload_state == UploadState::Uploaded
    }
}

/// Render progress as nested under the host's `state.gcode`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGcodeState {
    #[serde(default)]
    pub render_state: String,
}

/// Host-side state object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPanelState {
    #[serde(default)]
    pub gcode: RawGcodeState,
    #[serde(default)]
    pub workflow_state: Option<String>,
}

/// Panel inputs in their legacy string form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPanelInputs {
    #[serde(default)]
    pub upload_state: String,
    #[serde(default)]
    pub workflow_status: Option<String>,
    #[serde(default)]
    pub is_connected: bool,
    #[serde(default)]
    pub is_server_waiting: bool,
    #[serde(default)]
    pub connection_type: Option<String>,
    #[serde(default)]
    pub state: RawPanelState,
}

impl RawPanelInputs {
    /// Parse inputs from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn parse_optional<T: std::str::FromStr<Err = String>>(value: Option<&str>) -> Option<T> {
    let value = value?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Treating unrecognized value as absent: {}", e);
            None
        }
    }
}

impl From<&RawPanelInputs> for PanelInputs {
    fn from(raw: &RawPanelInputs) -> Self {
        Self {
            connection_type: raw.connection_type.as_deref().map(ConnectionType::from),
            workflow_status: parse_optional(raw.workflow_status.as_deref()),
            workflow_state: parse_optional(raw.state.workflow_state.as_deref()),
            upload_state: UploadState::from(raw.upload_state.as_str()),
            render_state: RenderState::from(raw.state.gcode.render_state.as_str()),
            is_connected: raw.is_connected,
            is_server_waiting: raw.is_server_waiting,
        }
    }
}

impl From<RawPanelInputs> for PanelInputs {
    fn from(raw: RawPanelInputs) -> Self {
        Self::from(&raw)
    }
}
