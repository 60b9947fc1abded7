//! G-code file intake
//!
//! Selecting a file notifies the host twice: once immediately with the file
//! itself, and once more with its decoded text when the read completes.
//! Reading is an explicit async operation returning a `Result`; the two
//! notifications are issued in sequence by [`FileIntake::intake`].
//!
//! Text is decoded leniently: invalid UTF-8 sequences become U+FFFD so a
//! stray Latin-1 byte in a comment does not block the file. Only read
//! failures end processing for a file; they are logged once, never retried
//! and never reach the toolbar.
//!
//! The accepted extensions only feed the picker filter. Whatever file the
//! picker hands over is forwarded.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::actions::WorkflowActions;
use crate::error::{IntakeError, Result};

/// Extensions offered by the file picker
pub const DEFAULT_ACCEPTED_EXTENSIONS: [&str; 3] = ["gcode", "nc", "cnc"];

const UTF8_BOM: char = '\u{feff}';

/// A file selected by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GcodeFile {
    path: PathBuf,
    name: String,
}

impl GcodeFile {
    /// Wrap a selected path; no I/O is performed
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name as shown to the user
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased extension without the leading dot
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// File attributes captured while reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size on disk in bytes
    pub size: u64,
    /// Last modification time, if the platform reports one
    pub modified: Option<DateTime<Local>>,
}

/// Decoded contents of a selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcodeText {
    pub file: GcodeFile,
    pub metadata: FileMetadata,
    pub text: String,
}

/// Read a selected file and decode it as UTF-8 text
///
/// Invalid sequences are replaced with U+FFFD and a leading byte-order mark
/// is dropped, so only I/O errors fail.
pub async fn read_gcode_text(file: &GcodeFile) -> Result<GcodeText> {
    let read_err = |source| IntakeError::Read {
        path: file.path().to_path_buf(),
        source,
    };

    let meta = tokio::fs::metadata(file.path()).await.map_err(read_err)?;
    let bytes = tokio::fs::read(file.path()).await.map_err(read_err)?;

    let mut text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "{} is not valid UTF-8 (first bad byte at {}); replacing invalid sequences",
                file.name(),
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    if text.starts_with(UTF8_BOM) {
        text.remove(0);
    }

    Ok(GcodeText {
        file: file.clone(),
        metadata: FileMetadata {
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
        },
        text,
    })
}

/// Result of taking in one selected file
#[derive(Debug)]
pub enum IntakeOutcome {
    /// Both notifications were delivered
    Loaded {
        /// File name passed to `handle_add_gcode`.
        name: String,
        /// Length of the decoded text in bytes.
        bytes: usize,
    },
    /// Processing stopped; the error has already been logged
    Failed(IntakeError),
}

impl IntakeOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, IntakeOutcome::Loaded { .. })
    }
}

/// Forwards selected files and their text to the host
#[derive(Debug, Clone)]
pub struct FileIntake {
    accepted_extensions: Vec<String>,
}

impl FileIntake {
    /// Create an intake accepting the given extensions
    ///
    /// Extensions are compared case-insensitively; a leading dot is ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            accepted_extensions,
        }
    }

    pub fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    /// Picker accept string, e.g. `.gcode, .nc, .cnc`
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Glob patterns for file chooser filters, e.g. `*.gcode`
    pub fn glob_patterns(&self) -> Vec<String> {
        self.accepted_extensions
            .iter()
            .map(|e| format!("*.{}", e))
            .collect()
    }

    /// Run the intake flow for one selected file
    ///
    /// `handle_upload_gcode_file` is called before the read starts;
    /// `handle_add_gcode` only after the file was read.
    pub async fn intake<A>(&self, actions: &A, file: GcodeFile) -> IntakeOutcome
    where
        A: WorkflowActions + ?Sized,
    {
        actions.handle_upload_gcode_file(&file);

        match read_gcode_text(&file).await {
            Ok(loaded) => {
                debug!(
                    file = %loaded.file.name(),
                    size = loaded.metadata.size,
                    modified = ?loaded.metadata.modified,
                    extension = ?loaded.file.extension(),
                    "G-code file read"
                );
                actions.handle_add_gcode(loaded.file.name(), &loaded.text);
                IntakeOutcome::Loaded {
                    name: loaded.file.name().to_string(),
                    bytes: loaded.text.len(),
                }
            }
            Err(e) => {
                error!("{}", e);
                IntakeOutcome::Failed(e)
            }
        }
    }
}

impl Default for FileIntake {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED_EXTENSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcode_file_name_and_extension() {
        let file = GcodeFile::new("/jobs/Bracket.GCODE");
        assert_eq!(file.name(), "Bracket.GCODE");
        assert_eq!(file.extension().as_deref(), Some("gcode"));

        let file = GcodeFile::new("/jobs/README");
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_default_accept_attribute() {
        let intake = FileIntake::default();
        assert_eq!(intake.accept_attribute(), ".gcode, .nc, .cnc");
        assert_eq!(intake.glob_patterns(), vec!["*.gcode", "*.nc", "*.cnc"]);
    }

    #[test]
    fn test_extensions_are_normalized() {
        let intake = FileIntake::new([".NC", " gcode ", ""]);
        assert_eq!(intake.accepted_extensions(), ["nc", "gcode"]);
        assert_eq!(intake.glob_patterns(), vec!["*.nc", "*.gcode"]);
    }

    #[tokio::test]
    async fn test_read_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.gcode");
        std::fs::write(&path, "\u{feff}G21\nG0 X1\n").unwrap();

        let loaded = read_gcode_text(&GcodeFile::new(&path)).await.unwrap();
        assert_eq!(loaded.text, "G21\nG0 X1\n");
        assert_eq!(loaded.metadata.size, 13);
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deg.gcode");
        std::fs::write(&path, b"; 90\xB0 corner\nG0 X0\n").unwrap();

        let loaded = read_gcode_text(&GcodeFile::new(&path)).await.unwrap();
        assert_eq!(loaded.text, "; 90\u{fffd} corner\nG0 X0\n");
        assert_eq!(loaded.metadata.size, 19);
    }

    #[tokio::test]
    async fn test_read_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folder.nc");
        std::fs::create_dir(&path).unwrap();

        let err = read_gcode_text(&GcodeFile::new(&path)).await.unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let err = read_gcode_text(&GcodeFile::new("/definitely/missing/part.nc"))
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
    }
}
