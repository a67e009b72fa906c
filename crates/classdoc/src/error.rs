use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for docblock operations.
pub type Result<T> = std::result::Result<T, DocblockError>;

/// Error variants for extraction, injection and file processing.
#[derive(Debug, Error)]
pub enum DocblockError {
    /// Failed to read or write a source file.
    #[error("failed to access '{path}': {error}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the source file with OXC failed.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// Another input maps to the same file in the output directory.
    #[error("output '{destination}' for '{path}' is shared with another input")]
    OutputConflict {
        /// Input file that was not written.
        path: PathBuf,
        /// Destination claimed by more than one input.
        destination: PathBuf,
    },
}

impl DocblockError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Helper to create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    /// Helper to create an output conflict for an input and its destination.
    pub fn output_conflict(path: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::OutputConflict {
            path: path.into(),
            destination: destination.into(),
        }
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::OutputConflict { path, .. } => path,
        }
    }

    /// Coarse error category used in batch reports.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::OutputConflict { .. } => ErrorKind::Conflict,
        }
    }
}

/// Serializable error category attached to failed files in a batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Parse,
    Io,
    Conflict,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => f.write_str("parse error"),
            Self::Io => f.write_str("i/o error"),
            Self::Conflict => f.write_str("output conflict"),
        }
    }
}
