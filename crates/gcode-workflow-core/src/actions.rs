//! Action handlers the panel delegates machine control to
//!
//! Provides:
//! - `WorkflowActions`, implemented by the host application
//! - `WorkflowCommand`, one variant per action
//! - `CommandDispatcher`, a broadcast-backed `WorkflowActions` for hosts
//!   that prefer subscribing to commands over implementing the trait

use std::rc::Rc;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

use crate::intake::GcodeFile;

/// Host callbacks invoked by the workflow control panel
pub trait WorkflowActions {
    /// Close the loaded G-code
    fn handle_close(&self);

    /// Start or resume the job
    fn handle_run(&self);

    /// Pause the running job
    fn handle_pause(&self);

    /// Stop the paused job
    fn handle_stop(&self);

    /// Decoded G-code text is available
    fn handle_add_gcode(&self, name: &str, content: &str);

    /// A file was selected; called before its contents are read
    fn handle_upload_gcode_file(&self, file: &GcodeFile);
}

impl<A: WorkflowActions + ?Sized> WorkflowActions for Rc<A> {
    fn handle_close(&self) {
        (**self).handle_close()
    }
    fn handle_run(&self) {
        (**self).handle_run()
    }
    fn handle_pause(&self) {
        (**self).handle_pause()
    }
    fn handle_stop(&self) {
        (**self).handle_stop()
    }
    fn handle_add_gcode(&self, name: &str, content: &str) {
        (**self).handle_add_gcode(name, content)
    }
    fn handle_upload_gcode_file(&self, file: &GcodeFile) {
        (**self).handle_upload_gcode_file(file)
    }
}

impl<A: WorkflowActions + ?Sized> WorkflowActions for Arc<A> {
    fn handle_close(&self) {
        (**self).handle_close()
    }
    fn handle_run(&self) {
        (**self).handle_run()
    }
    fn handle_pause(&self) {
        (**self).handle_pause()
    }
    fn handle_stop(&self) {
        (**self).handle_stop()
    }
    fn handle_add_gcode(&self, name: &str, content: &str) {
        (**self).handle_add_gcode(name, content)
    }
    fn handle_upload_gcode_file(&self, file: &GcodeFile) {
        (**self).handle_upload_gcode_file(file)
    }
}

/// A single panel action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    Close,
    Run,
    Pause,
    Stop,
    /// Decoded G-code text
    AddGcode {
        /// File name as shown to the user.
        name: String,
        /// Full text content.
        content: String,
    },
    /// File selected, contents not yet read
    UploadGcodeFile(GcodeFile),
}

impl std::fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowCommand::Close => write!(f, "Close"),
            WorkflowCommand::Run => write!(f, "Run"),
            WorkflowCommand::Pause => write!(f, "Pause"),
            WorkflowCommand::Stop => write!(f, "Stop"),
            WorkflowCommand::AddGcode { name, content } => {
                write!(f, "Add G-code: {} ({} bytes)", name, content.len())
            }
            WorkflowCommand::UploadGcodeFile(file) => write!(f, "Upload G-code file: {}", file.name()),
        }
    }
}

/// Publishes panel actions to broadcast subscribers
#[derive(Clone)]
pub struct CommandDispatcher {
    tx: broadcast::Sender<WorkflowCommand>,
}

impl CommandDispatcher {
    /// Create a new dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Subscribe to commands
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowCommand> {
        self.tx.subscribe()
    }

    /// Publish a command to all subscribers
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, command: WorkflowCommand) -> usize {
        match self.tx.send(command) {
            Ok(count) => count,
            Err(broadcast::error::SendError(command)) => {
                trace!("No subscribers for command: {}", command);
                0
            }
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}

impl WorkflowActions for CommandDispatcher {
    fn handle_close(&self) {
        self.publish(WorkflowCommand::Close);
    }

    fn handle_run(&self) {
        self.publish(WorkflowCommand::Run);
    }

    fn handle_pause(&self) {
        self.publish(WorkflowCommand::Pause);
    }

    fn handle_stop(&self) {
        self.publish(WorkflowCommand::Stop);
    }

    fn handle_add_gcode(&self, name: &str, content: &str) {
        self.publish(WorkflowCommand::AddGcode {
            name: name.to_string(),
            content: content.to_string(),
        });
    }

    fn handle_upload_gcode_file(&self, file: &GcodeFile) {
        self.publish(WorkflowCommand::UploadGcodeFile(file.clone()));
    }
}
