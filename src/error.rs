//! Error types for the Pathy panel backend.

use std::path::PathBuf;
use thiserror::Error;

/// Failures met while enumerating the workspace tree.
///
/// None of these are fatal: the enumerator reports them and keeps whatever it
/// already gathered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryReadError {
    #[error("Workspace folder is missing.")]
    MissingWorkspace,

    #[error("Error reading directory: {message}")]
    Unreadable { path: PathBuf, message: String },
}

impl DirectoryReadError {
    pub fn unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DirectoryReadError::Unreadable {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// JSON syntax error reported by the validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Top-level error for CLI and host operations
#[derive(Debug, Error)]
pub enum PathyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] ParseError),
}

impl From<config::ConfigError> for PathyError {
    fn from(err: config::ConfigError) -> Self {
        PathyError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for PathyError {
    fn from(err: serde_json::Error) -> Self {
        PathyError::Protocol(err.to_string())
    }
}
