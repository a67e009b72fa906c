//! Error types for the classdoc CLI.
//!
//! `CliError` is returned by every command. Configuration problems carry a
//! hint telling the user what to change; per-file failures from the core
//! library are reported in the batch summary, and only their count reaches
//! this type.
//!
//! # Example
//!
//! ```rust,no_run
//! use classdoc_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration errors (missing file, bad values, bad patterns)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single file could not be documented
    #[error(transparent)]
    Docblock(#[from] classdoc::DocblockError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input selectors matched no source files
    #[error("No source files matched: {patterns}\n\nHint: Pass files, directories or glob patterns, or set 'input' in classdoc.config.json")]
    NoInputs {
        /// The selectors that were expanded
        patterns: String,
    },

    /// Some files failed to parse or could not be read or written
    #[error("{0} file(s) could not be documented")]
    FilesFailed(usize),

    /// `check` found files whose header block is missing or outdated
    #[error("{0} file(s) have a stale header block\n\nHint: Run 'classdoc inject --in-place' to update them")]
    StaleFiles(usize),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with `--config` doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a classdoc.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// An input selector is not a valid glob
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The selector as written
        pattern: String,
        /// Parser message from globset
        message: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("classdoc.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("classdoc.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::NotFound(PathBuf::from("test.json"));
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_docblock_error_is_transparent() {
        let err = classdoc::DocblockError::Parse {
            path: PathBuf::from("src/Broken.js"),
            message: "Unexpected token".to_string(),
        };
        let expected = err.to_string();
        let cli_err: CliError = err.into();
        assert!(matches!(cli_err, CliError::Docblock(_)));
        assert_eq!(cli_err.to_string(), expected);
    }

    #[test]
    fn test_no_inputs_has_hint() {
        let err = CliError::NoInputs {
            patterns: "lib/**/*.js".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lib/**/*.js"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.js").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/path.js").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "outDir".to_string(),
            value: "\"\"".to_string(),
            hint: "Provide a directory or use inPlace".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'outDir'"));
        assert!(msg.contains("Hint: Provide a directory"));
    }
}
