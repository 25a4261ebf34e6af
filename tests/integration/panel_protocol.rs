//! Panel message protocol over an in-memory transport

use super::test_utils::sample_workspace;
use pathy::panel::{Panel, PanelServer, RecordingNotifier};
use pathy::tree::WalkerConfig;
use serde_json::{json, Value};
use std::io::Cursor;

fn serve(input: &str) -> Vec<Value> {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let panel = Panel::open(
        "/ws/src/index.ts",
        workspace.path().to_path_buf(),
        WalkerConfig::default(),
        &notifier,
    );
    assert!(notifier.errors().is_empty());

    let mut output = Vec::new();
    PanelServer::new(panel, Cursor::new(input.to_string()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_panel_opens_with_seed() {
    let messages = serve("");
    assert_eq!(
        messages,
        vec![json!({
            "command": "panelOpened",
            "initialFilePath": "/ws/src/index.ts",
            "projectStructure": { "a.txt": "file", "b": { "c.txt": "file" } }
        })]
    );
}

#[test]
fn test_full_session() {
    let input = [
        json!({ "command": "generateFromInput", "filePath": "C:\\repo\\api\\users.ts" }),
        json!({ "command": "validateJSON", "JSON_Object": "{\"name\": \"pathy\"}" }),
        json!({ "command": "validateJSON", "JSON_Object": "{a:}" }),
        json!({ "command": "validateJSON", "JSON_Object": "" }),
    ]
    .iter()
    .map(|m| m.to_string())
    .collect::<Vec<_>>()
    .join("\n");

    let messages = serve(&input);
    assert_eq!(messages.len(), 5);
    assert_eq!(
        messages[1],
        json!({ "command": "updateApiPath", "apiPath": "C:/repo/api/users.ts" })
    );
    assert_eq!(
        messages[2],
        json!({ "command": "jsonValidationResult", "isValid": true, "errorMessage": "" })
    );
    for invalid in &messages[3..] {
        assert_eq!(invalid["command"], "jsonValidationResult");
        assert_eq!(invalid["isValid"], false);
        assert!(!invalid["errorMessage"].as_str().unwrap().is_empty());
    }
}

#[test]
fn test_session_survives_bad_lines() {
    let input = "{\"command\": \n[]\n{\"command\":\"generateFromInput\",\"filePath\":\"\\\\\"}\n";
    let messages = serve(input);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], json!({ "command": "updateApiPath", "apiPath": "/" }));
}
