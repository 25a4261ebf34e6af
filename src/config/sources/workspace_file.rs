//! Workspace config file source: <workspace>/.pathy/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the per-workspace config file
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".pathy").join("config.toml")
}

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_config_path(workspace_root);
    if !config_path.is_file() {
        return Ok(builder);
    }

    debug!(config_path = %config_path.display(), "Loading workspace config");
    Ok(builder.add_source(File::from(config_path.as_path()).required(false)))
}
