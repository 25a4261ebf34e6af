//! Panel domain
//!
//! Host side of the panel: seeds it with the active file and the workspace
//! tree, then answers its requests one at a time. The panel itself (markup,
//! styling, lifecycle) is an opaque collaborator that only speaks the
//! messages in [`message`].

pub mod message;
pub mod notify;
pub mod server;

pub use message::{PanelRequest, PanelResponse};
pub use notify::{Notifier, RecordingNotifier, StderrNotifier};
pub use server::PanelServer;

use crate::error::PathyError;
use crate::path::to_api_path;
use crate::tree::{render, DirectoryTree, Walker, WalkerConfig};
use crate::validate::validate_json;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// State the panel is opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSeed {
    /// Path of the active file, or empty when no file is open
    pub initial_file_path: String,
    pub workspace_root: PathBuf,
    pub project_structure: DirectoryTree,
}

impl PanelSeed {
    /// Project structure as 2-space indented JSON
    pub fn project_structure_json(&self) -> Result<String, PathyError> {
        render::to_json(&self.project_structure)
    }

    /// Message that hands the seed to a connected panel
    pub fn to_response(&self) -> PanelResponse {
        PanelResponse::PanelOpened {
            initial_file_path: self.initial_file_path.clone(),
            project_structure: self.project_structure.clone(),
        }
    }
}

/// An open panel
pub struct Panel {
    seed: PanelSeed,
}

impl Panel {
    /// Open the panel: scan the workspace once and report any read failures
    /// through `notifier`.
    ///
    /// An empty `workspace_root` means no folder is open; the panel still
    /// opens, with an empty project structure.
    pub fn open(
        initial_file_path: impl Into<String>,
        workspace_root: PathBuf,
        walker_config: WalkerConfig,
        notifier: &dyn Notifier,
    ) -> Self {
        let initial_file_path = initial_file_path.into();
        info!(
            workspace = %workspace_root.display(),
            file = %initial_file_path,
            "Opening panel"
        );

        let scan = Walker::with_config(workspace_root.clone(), walker_config).walk();
        for error in &scan.errors {
            notifier.show_error(&error.to_string());
        }

        Self {
            seed: PanelSeed {
                initial_file_path,
                workspace_root,
                project_structure: scan.tree,
            },
        }
    }

    pub fn seed(&self) -> &PanelSeed {
        &self.seed
    }

    /// Answer one panel request. Unknown commands get no reply.
    pub fn handle(&self, request: PanelRequest) -> Option<PanelResponse> {
        debug!(command = request.command(), "Panel request received");
        match request {
            PanelRequest::GenerateFromInput { file_path } => Some(PanelResponse::UpdateApiPath {
                api_path: to_api_path(&file_path),
            }),
            PanelRequest::ValidateJson { json_object } => {
                Some(PanelResponse::from(validate_json(&json_object)))
            }
            PanelRequest::Unknown => {
                warn!("Ignoring unknown panel command");
                None
            }
        }
    }
}
