//! Error types for oaslint operations.
//!
//! This module defines [`LintError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-file errors (`UnsupportedFormat`, `Parse`, `MissingDescriptor`,
//!   `Engine`) exclude that file from the run without aborting other files
//! - Configuration errors are fatal to the whole run (exit code 2)
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for oaslint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// File extension is not one of json, yaml, yml.
    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Document is not valid JSON or YAML.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Document has neither an `openapi` field nor `swagger: "2.0"`.
    #[error("{path} has no openapi or swagger descriptor field")]
    MissingDescriptor { path: PathBuf },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration parsed but contains invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A delegated engine invocation failed.
    #[error("Engine '{engine}' failed: {message}")]
    Engine { engine: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Whether this error is fatal to the whole run rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LintError::ConfigNotFound { .. }
                | LintError::ConfigParse { .. }
                | LintError::ConfigValidation { .. }
        )
    }
}

/// Result type alias for oaslint operations.
pub type Result<T> = std::result::Result<T, LintError>;
