//! CLI help: command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "tree", "serve").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Path { .. } => "path",
        Commands::Validate { .. } => "validate",
        Commands::Tree { .. } => "tree",
        Commands::Open { .. } => "open",
        Commands::Serve { .. } => "serve",
        Commands::Config => "config",
    }
}
