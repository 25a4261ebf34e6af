//! Integration tests for the configuration system

use pathy::cli::RunContext;
use pathy::config::{workspace_config_path, ConfigLoader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_tree_options() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(workspace.join(".git")).unwrap();
    fs::write(workspace.join(".git").join("HEAD"), "ref").unwrap();
    fs::write(workspace.join("main.rs"), "").unwrap();

    let config_file = temp_dir.path().join("pathy.toml");
    fs::write(
        &config_file,
        format!(
            r#"
workspace_root = "{}"

[tree]
ignore_patterns = [".git"]
"#,
            workspace.display()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());

    let ctx = RunContext::with_config(config, None).unwrap();
    assert_eq!(ctx.workspace_root(), workspace.as_path());

    let notifier = pathy::panel::RecordingNotifier::new();
    let json = ctx
        .handle_tree("json", ctx.config().tree.clone(), &notifier)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({ "main.rs": "file" }));
}

#[test]
fn test_invalid_ignore_pattern_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("pathy.toml");
    fs::write(&config_file, "[tree]\nignore_patterns = [\"src/gen\"]\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_err());
    assert!(RunContext::with_config(config, None).is_err());
}

#[test]
fn test_workspace_config_path_layout() {
    let root = std::path::Path::new("/srv/ws");
    assert_eq!(
        workspace_config_path(root),
        std::path::PathBuf::from("/srv/ws/.pathy/config.toml")
    );
}
