//! Error handling for the css2js CLI.
//!
//! This module provides a hierarchical error type system using `thiserror` for
//! structured error handling with actionable error messages.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `css2js::Error`) carry detail
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Context helpers** allow attaching paths or hints to errors
//!
//! # Example
//!
//! ```rust,no_run
//! use css2js_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_stylesheet(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Check the input path")
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors loading or converting a source
    #[error("Conversion error: {0}")]
    Convert(#[from] css2js::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations and streamed sources
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more conversion jobs failed
    #[error("{failed} of {total} file(s) failed to convert")]
    JobsFailed {
        /// Number of failed jobs
        failed: usize,
        /// Number of jobs run
        total: usize,
    },

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file passed with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a css2js.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

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
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    ///
    /// Turns a "not found" I/O error into [`CliError::FileNotFound`] and
    /// prefixes other errors with the path.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error context.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Convert to a custom error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                CliError::Io(io_err) => {
                    CliError::Custom(format!("{}: {}", path.as_ref().display(), io_err))
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a `CliError` into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Convert(css2js::Error::UnsupportedSource { path, kind }) => miette::miette!(
            "Unhandled source type for {}: {}\n\nHint: Only regular files, directories and stdin (-) can be converted",
            path.display(),
            kind
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("css2js.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("css2js.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "splitOnNewline".to_string(),
            value: "sometimes".to_string(),
            hint: "Must be true or false".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'splitOnNewline'"));
        assert!(msg.contains("sometimes"));
        assert!(msg.contains("Must be true or false"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::NotFound(PathBuf::from("test.json"));
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_convert_error() {
        let err: CliError = css2js::Error::UnsupportedSource {
            path: PathBuf::from("dev/tty"),
            kind: "character device",
        }
        .into();
        assert!(matches!(err, CliError::Convert(_)));
        assert!(err.to_string().contains("character device"));
    }

    #[test]
    fn test_jobs_failed_message() {
        let err = CliError::JobsFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 file(s) failed to convert");
    }

    #[test]
    fn test_result_ext_with_path_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.css").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_other_io() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));

        let err = result.with_path("/test/out.js").unwrap_err();
        assert!(err.to_string().contains("/test/out.js"));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));

        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));

        let err = result.context("Failed to load options").unwrap_err();
        assert!(err.to_string().contains("Failed to load options"));
    }
}
