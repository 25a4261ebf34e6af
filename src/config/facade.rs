//! Config loading entry point: builds the layered source stack and deserializes it.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::PathyConfig;
use crate::error::PathyError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`PathyConfig`] from defaults, files and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global config file,
    /// `<workspace>/.pathy/config.toml`, `PATHY__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<PathyConfig, PathyError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: PathyConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file, skipping the global and
    /// workspace files. Environment overrides still apply.
    pub fn load_from_file(config_path: &Path) -> Result<PathyConfig, PathyError> {
        if !config_path.is_file() {
            return Err(PathyError::ConfigError(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(config_path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: PathyConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %config_path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
