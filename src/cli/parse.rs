//! CLI parse: clap types for Pathy. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pathy CLI - API paths, JSON validation and workspace tree dumps
#[derive(Parser)]
#[command(name = "pathy")]
#[command(about = "Generate API paths, validate JSON, and dump the workspace tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (default: configured root, then ".")
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a file path into a slash-delimited API path
    Path {
        /// File path to convert
        input: String,
    },
    /// Check text for JSON well-formedness
    Validate {
        /// JSON text (omit to read --file or stdin)
        text: Option<String>,
        /// Read the JSON text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Exit with an error when the text is not valid JSON
        #[arg(long)]
        strict: bool,
    },
    /// Print the workspace directory tree
    Tree {
        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
        /// Maximum depth below the workspace root
        #[arg(long)]
        max_depth: Option<usize>,
        /// Descend into symlinked directories
        #[arg(long)]
        follow_symlinks: bool,
        /// File names to leave out (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,
    },
    /// Open the panel once and print its initial state
    Open {
        /// Path of the active file
        #[arg(long)]
        file: Option<String>,
    },
    /// Open the panel and serve its messages as JSON lines over stdin/stdout
    Serve {
        /// Path of the active file
        #[arg(long)]
        file: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}
