//! Panel/host wire messages
//!
//! Every message is a JSON object tagged by its `command` field. Field names
//! follow the panel script exactly, including the odd `JSON_Object`.

use crate::tree::DirectoryTree;
use crate::validate::ValidationOutcome;
use serde::{Deserialize, Serialize};

/// Message sent from the panel to the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command")]
pub enum PanelRequest {
    /// Convert a typed or picked file path into an API path
    #[serde(rename = "generateFromInput", rename_all = "camelCase")]
    GenerateFromInput { file_path: String },

    /// Check pasted text for JSON well-formedness
    #[serde(rename = "validateJSON")]
    ValidateJson {
        #[serde(rename = "JSON_Object")]
        json_object: String,
    },

    /// Any command the host does not handle
    #[serde(other)]
    Unknown,
}

/// Message sent from the host back to the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command")]
pub enum PanelResponse {
    #[serde(rename = "panelOpened", rename_all = "camelCase")]
    PanelOpened {
        initial_file_path: String,
        project_structure: DirectoryTree,
    },

    #[serde(rename = "updateApiPath", rename_all = "camelCase")]
    UpdateApiPath { api_path: String },

    #[serde(rename = "jsonValidationResult", rename_all = "camelCase")]
    JsonValidationResult {
        is_valid: bool,
        error_message: String,
    },
}

impl From<ValidationOutcome> for PanelResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        PanelResponse::JsonValidationResult {
            is_valid: outcome.is_valid,
            error_message: outcome.error_message,
        }
    }
}

impl PanelRequest {
    /// Decode one request from its JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Wire name of the command, for logging
    pub fn command(&self) -> &'static str {
        match self {
            PanelRequest::GenerateFromInput { .. } => "generateFromInput",
            PanelRequest::ValidateJson { .. } => "validateJSON",
            PanelRequest::Unknown => "unknown",
        }
    }
}

impl PanelResponse {
    /// Encode as a single line of JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
