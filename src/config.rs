//! Configuration System
//!
//! Layered TOML configuration (defaults, global file, workspace file,
//! environment) for the workspace root, tree walking and logging.

use crate::logging::LoggingConfig;
use crate::tree::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathyConfig {
    /// Workspace root to scan when `--workspace` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Tree walking options
    #[serde(default)]
    pub tree: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Tree(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Tree(msg) => write!(f, "Tree: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PathyConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for pattern in &self.tree.ignore_patterns {
            if pattern.trim().is_empty() {
                errors.push(ValidationError::Tree(
                    "Ignore patterns cannot be empty".to_string(),
                ));
            } else if pattern.contains('/') || pattern.contains('\\') {
                errors.push(ValidationError::Tree(format!(
                    "Ignore pattern '{}' must be a file name, not a path",
                    pattern
                )));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Workspace root to use: an explicit one wins over the configured one,
    /// which wins over the current directory.
    pub fn resolve_workspace_root(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.workspace_root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
