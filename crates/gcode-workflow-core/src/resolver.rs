//! Button enablement for the workflow control panel
//!
//! The panel has no state machine of its own: every update re-derives which
//! actions are available from the current `PanelInputs`.

use serde::{Deserialize, Serialize};

use crate::data::{PanelInputs, WorkflowPhase};

/// Actions available for a given input snapshot
///
/// The `can_*` flags are the raw enablement predicates. Run, pause, stop
/// and close are additionally blocked while the server is waiting; use
/// [`ControlAvailability::run_enabled`] and friends for the gated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlAvailability {
    /// Authoritative phase the flags were derived from
    pub phase: Option<WorkflowPhase>,
    pub can_upload: bool,
    pub can_close: bool,
    pub can_play: bool,
    pub can_pause: bool,
    pub can_stop: bool,
    /// Server busy; gates everything except upload
    pub is_server_waiting: bool,
}

impl ControlAvailability {
    /// Derive availability from an input snapshot
    pub fn resolve(inputs: &PanelInputs) -> Self {
        let phase = inputs.phase();
        let is_rendered = inputs.is_rendered();

        let accepts_new_job = phase.is_some_and(|p| p.accepts_new_job());
        let is_running = phase.is_some_and(|p| p.is_running());

        Self {
            phase,
            can_upload: accepts_new_job,
            can_close: is_rendered && accepts_new_job,
            can_play: inputs.is_connected && is_rendered && inputs.is_uploaded() && !is_running,
            can_pause: is_running,
            can_stop: phase.is_some_and(|p| p.is_paused()),
            is_server_waiting: inputs.is_server_waiting,
        }
    }

    pub fn upload_enabled(&self) -> bool {
        self.can_upload
    }

    pub fn run_enabled(&self) -> bool {
        !self.is_server_waiting && self.can_play
    }

    pub fn pause_enabled(&self) -> bool {
        !self.is_server_waiting && self.can_pause
    }

    pub fn stop_enabled(&self) -> bool {
        !self.is_server_waiting && self.can_stop
    }

    pub fn close_enabled(&self) -> bool {
        !self.is_server_waiting && self.can_close
    }
}

impl From<&PanelInputs> for ControlAvailability {
    fn from(inputs: &PanelInputs) -> Self {
        Self::resolve(inputs)
    }
}
