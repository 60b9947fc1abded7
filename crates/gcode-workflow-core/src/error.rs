//! Error handling for the workflow panel core
//!
//! Only reading a selected file can fail. Intake errors are logged by the
//! caller and never surfaced to the toolbar.

use std::path::PathBuf;
use thiserror::Error;

/// G-code file intake error
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl IntakeError {
    /// Path of the file the error relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            IntakeError::Read { path, .. } => path,
        }
    }
}

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;
