//! End-to-end tests against the `pathy` binary

use super::test_utils::{pathy_command, sample_workspace};
use std::io::Write;
use std::process::Stdio;
use tempfile::TempDir;

#[test]
fn test_path_command_prints_api_path() {
    let home = TempDir::new().unwrap();
    let output = pathy_command(home.path())
        .args(["--quiet", "path", r"src\routes\users.ts"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "src/routes/users.ts\n");
}

#[test]
fn test_tree_command_prints_json() {
    let home = TempDir::new().unwrap();
    let workspace = sample_workspace();
    let output = pathy_command(home.path())
        .arg("--quiet")
        .arg("--workspace")
        .arg(workspace.path())
        .arg("tree")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "a.txt": "file", "b": { "c.txt": "file" } })
    );
}

#[test]
fn test_tree_command_on_missing_workspace_degrades() {
    let home = TempDir::new().unwrap();
    let output = pathy_command(home.path())
        .arg("--quiet")
        .arg("--workspace")
        .arg(home.path().join("missing"))
        .arg("tree")
        .output()
        .unwrap();

    assert!(output.status.success(), "read errors must not fail the command");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading directory"));
}

#[test]
fn test_validate_reads_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = pathy_command(home.path())
        .args(["--quiet", "validate", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"{a:}")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "jsonValidationResult");
    assert_eq!(value["isValid"], false);
}

#[test]
fn test_serve_speaks_json_lines() {
    let home = TempDir::new().unwrap();
    let workspace = sample_workspace();
    let mut child = pathy_command(home.path())
        .arg("--quiet")
        .arg("--workspace")
        .arg(workspace.path())
        .args(["serve", "--file", r"C:\ws\a.txt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, r#"{{"command":"generateFromInput","filePath":"x\\y"}}"#).unwrap();
        writeln!(stdin, r#"{{"command":"validateJSON","JSON_Object":"[1]"}}"#).unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let messages: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["command"], "panelOpened");
    assert_eq!(messages[0]["initialFilePath"], r"C:\ws\a.txt");
    assert_eq!(messages[1]["apiPath"], "x/y");
    assert_eq!(messages[2]["isValid"], true);
}

#[test]
fn test_bad_config_file_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("pathy.toml");
    std::fs::write(&config_file, "[logging]\nformat = \"yaml\"\n").unwrap();

    let output = pathy_command(home.path())
        .arg("--quiet")
        .arg("--config")
        .arg(&config_file)
        .args(["path", "a"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration error"));
}
