//! CLI route: single route table and run context. Dispatches to the library and presentation.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_panel_seed, format_validation_json, format_validation_text};
use crate::config::{ConfigLoader, PathyConfig};
use crate::error::PathyError;
use crate::panel::{Notifier, Panel, PanelServer, StderrNotifier};
use crate::path::to_api_path;
use crate::tree::{render, Walker, WalkerConfig};
use crate::validate::{check_json, validate_json};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded configuration and the workspace root.
pub struct RunContext {
    config: PathyConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from an optional workspace root and config path.
    ///
    /// The workspace file is looked up under the explicit workspace (or the
    /// current directory); a configured `workspace_root` only applies when no
    /// `--workspace` is given.
    pub fn new(workspace: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, PathyError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(workspace.as_deref().unwrap_or(Path::new(".")))?,
        };
        Self::with_config(config, workspace)
    }

    /// Create run context from an already loaded configuration
    pub fn with_config(config: PathyConfig, workspace: Option<PathBuf>) -> Result<Self, PathyError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            PathyError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let workspace_root = config.resolve_workspace_root(workspace.as_deref());
        Ok(Self {
            config,
            workspace_root,
        })
    }

    pub fn config(&self) -> &PathyConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a command and return the text to print on stdout
    pub fn execute(&self, command: &Commands) -> Result<String, PathyError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, PathyError> {
        match command {
            Commands::Path { input } => Ok(to_api_path(input)),
            Commands::Validate {
                text,
                file,
                format,
                strict,
            } => {
                let input = match (text, file) {
                    (Some(text), _) => text.clone(),
                    (None, Some(path)) => std::fs::read_to_string(path)?,
                    (None, None) => {
                        let mut buf = String::new();
                        std::io::stdin().read_to_string(&mut buf)?;
                        buf
                    }
                };
                if *strict {
                    check_json(&input)?;
                }
                let outcome = validate_json(&input);
                match format.as_str() {
                    "json" => format_validation_json(&outcome),
                    "text" => Ok(format_validation_text(
                        &outcome,
                        std::io::stdout().is_terminal(),
                    )),
                    other => Err(unknown_format(other, &["text", "json"])),
                }
            }
            Commands::Tree {
                format,
                max_depth,
                follow_symlinks,
                ignore,
            } => {
                let walker_config = self.walker_config(*max_depth, *follow_symlinks, ignore);
                self.handle_tree(format, walker_config, &StderrNotifier)
            }
            Commands::Open { file } => {
                let panel = self.open_panel(file.as_deref(), &StderrNotifier);
                format_panel_seed(panel.seed())
            }
            Commands::Serve { file } => {
                let panel = self.open_panel(file.as_deref(), &StderrNotifier);
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                let summary = PanelServer::new(panel, stdin.lock(), stdout.lock()).run()?;
                info!(handled = summary.handled, "Serve session ended");
                Ok(String::new())
            }
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                PathyError::ConfigError(format!("Failed to render configuration: {}", e))
            }),
        }
    }

    /// Render the workspace tree, reporting read failures through `notifier`
    pub fn handle_tree(
        &self,
        format: &str,
        walker_config: WalkerConfig,
        notifier: &dyn Notifier,
    ) -> Result<String, PathyError> {
        if format != "json" && format != "text" {
            return Err(unknown_format(format, &["json", "text"]));
        }

        let scan = Walker::with_config(self.workspace_root.clone(), walker_config).walk();
        for error in &scan.errors {
            notifier.show_error(&error.to_string());
        }

        if format == "json" {
            render::to_json(&scan.tree)
        } else {
            Ok(render::to_text(&scan.tree).trim_end().to_string())
        }
    }

    /// Open the panel against this context's workspace
    pub fn open_panel(&self, file: Option<&str>, notifier: &dyn Notifier) -> Panel {
        Panel::open(
            file.unwrap_or_default(),
            self.workspace_root.clone(),
            self.config.tree.clone(),
            notifier,
        )
    }

    /// Configured walker options with command-line overrides applied
    fn walker_config(
        &self,
        max_depth: Option<usize>,
        follow_symlinks: bool,
        ignore: &[String],
    ) -> WalkerConfig {
        let mut config = self.config.tree.clone();
        if max_depth.is_some() {
            config.max_depth = max_depth;
        }
        if follow_symlinks {
            config.follow_symlinks = true;
        }
        config.ignore_patterns.extend(ignore.iter().cloned());
        config
    }
}

fn unknown_format(format: &str, allowed: &[&str]) -> PathyError {
    PathyError::ConfigError(format!(
        "Unknown output format '{}' (expected one of: {})",
        format,
        allowed.join(", ")
    ))
}
