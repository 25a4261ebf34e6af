//! Path utilities: API path generation and workspace root resolution

use crate::error::DirectoryReadError;
use std::path::{Path, PathBuf};

/// Turn a file path into a slash-delimited API path
///
/// Every backslash becomes a forward slash; all other characters are kept
/// in order. Total and allocation-only, no filesystem access.
pub fn to_api_path(input: &str) -> String {
    input.replace('\\', "/")
}

/// Resolve the workspace root to an absolute path for display and walking.
///
/// An empty root means no workspace is open. Uses dunce so Windows roots
/// don't come back as `\\?\` UNC paths.
pub fn resolve_workspace_root(root: &Path) -> Result<PathBuf, DirectoryReadError> {
    if root.as_os_str().is_empty() {
        return Err(DirectoryReadError::MissingWorkspace);
    }
    dunce::canonicalize(root).map_err(|e| DirectoryReadError::unreadable(root, e.to_string()))
}
