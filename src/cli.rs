//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to the library modules.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_panel_seed, format_validation_json, format_validation_text};
pub use route::RunContext;
