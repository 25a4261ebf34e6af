//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PathyError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &PathyError) -> String {
    match e {
        PathyError::ConfigError(msg) => format!("configuration error: {}", msg),
        other => other.to_string(),
    }
}
