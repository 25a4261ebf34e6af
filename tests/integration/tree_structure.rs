//! Workspace tree enumeration through the public API

use super::test_utils::sample_workspace;
use pathy::panel::{Panel, RecordingNotifier};
use pathy::tree::{render, DirectoryEntry, Walker, WalkerConfig};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_sample_workspace_structure() {
    let workspace = sample_workspace();
    let scan = Walker::new(workspace.path().to_path_buf()).walk();

    assert!(scan.is_complete());
    assert_eq!(
        serde_json::to_value(&scan.tree).unwrap(),
        json!({ "a.txt": "file", "b": { "c.txt": "file" } })
    );
    assert_eq!(scan.tree.get("a.txt"), Some(&DirectoryEntry::Leaf));
    assert!(scan.tree.get("b").unwrap().is_container());
}

#[test]
fn test_rendered_json_is_stable_across_scans() {
    let workspace = sample_workspace();
    let walker = Walker::new(workspace.path().to_path_buf());

    let first = render::to_json(&walker.walk().tree).unwrap();
    let second = render::to_json(&walker.walk().tree).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tree_is_rebuilt_on_every_scan() {
    let workspace = sample_workspace();
    let walker = Walker::new(workspace.path().to_path_buf());
    let before = walker.walk();

    fs::write(workspace.path().join("new.txt"), "").unwrap();
    let after = walker.walk();

    assert!(before.tree.get("new.txt").is_none());
    assert_eq!(after.tree.get("new.txt"), Some(&DirectoryEntry::Leaf));
}

#[test]
fn test_missing_workspace_yields_empty_tree_and_one_notification() {
    let temp_dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::new();

    let panel = Panel::open(
        "",
        temp_dir.path().join("not-there"),
        WalkerConfig::default(),
        &notifier,
    );

    assert!(panel.seed().project_structure.is_empty());
    assert_eq!(panel.seed().project_structure_json().unwrap(), "{}");
    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error reading directory:"));
}

#[test]
fn test_no_workspace_open() {
    let notifier = RecordingNotifier::new();
    let panel = Panel::open("", PathBuf::new(), WalkerConfig::default(), &notifier);

    assert!(panel.seed().project_structure.is_empty());
    assert_eq!(notifier.errors(), vec!["Workspace folder is missing."]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_keeps_rest_of_tree() {
    use std::os::unix::fs::PermissionsExt;

    let workspace = sample_workspace();
    let locked = workspace.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret.txt"), "").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; nothing to observe in that case.
    let readable_anyway = fs::read_dir(&locked).is_ok();

    let scan = Walker::new(workspace.path().to_path_buf()).walk();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(scan.tree.get("a.txt").is_some());
    assert!(scan.tree.get("b").is_some());
    if !readable_anyway {
        assert_eq!(scan.errors.len(), 1);
        let locked_entry = scan.tree.get("locked").and_then(DirectoryEntry::children).unwrap();
        assert!(locked_entry.is_empty());
    }
}
