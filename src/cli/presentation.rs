//! CLI presentation: text and json formatters per command.

use crate::error::PathyError;
use crate::panel::{PanelResponse, PanelSeed};
use crate::path::{resolve_workspace_root, to_api_path};
use crate::validate::ValidationOutcome;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// One-line verdict; colored when `color` is set
pub fn format_validation_text(outcome: &ValidationOutcome, color: bool) -> String {
    match (outcome.is_valid, color) {
        (true, true) => format!("{}", "Valid JSON".green()),
        (true, false) => "Valid JSON".to_string(),
        (false, true) => format!("{} {}", "Invalid JSON:".red(), outcome.error_message),
        (false, false) => format!("Invalid JSON: {}", outcome.error_message),
    }
}

/// The validation result exactly as the panel receives it
pub fn format_validation_json(outcome: &ValidationOutcome) -> Result<String, PathyError> {
    let response = PanelResponse::from(outcome.clone());
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Summary table of the panel seed followed by the project structure JSON
pub fn format_panel_seed(seed: &PanelSeed) -> Result<String, PathyError> {
    let workspace = resolve_workspace_root(&seed.workspace_root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| seed.workspace_root.display().to_string());
    let (dirs, files) = seed.project_structure.counts();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["Active file", display_or_dash(&seed.initial_file_path)]);
    table.add_row(vec![
        "API path".to_string(),
        display_or_dash(&to_api_path(&seed.initial_file_path)).to_string(),
    ]);
    table.add_row(vec!["Workspace".to_string(), workspace]);
    table.add_row(vec!["Directories".to_string(), dirs.to_string()]);
    table.add_row(vec!["Files".to_string(), files.to_string()]);

    Ok(format!(
        "{}\n\nProject structure:\n{}",
        table,
        seed.project_structure_json()?
    ))
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
