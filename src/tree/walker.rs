//! Filesystem walker that mirrors a workspace as a nested [`DirectoryTree`]

use crate::error::DirectoryReadError;
use crate::tree::entry::DirectoryTree;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to descend into symlinked directories (default: false, so the walk cannot cycle)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// File names to leave out together with everything below them (e.g. ".git")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth below the root to descend (None = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Outcome of one walk: the tree gathered and every read failure on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeScan {
    pub tree: DirectoryTree,
    pub errors: Vec<DirectoryReadError>,
}

impl TreeScan {
    fn failed(error: DirectoryReadError) -> Self {
        warn!(error = %error, "Workspace tree scan failed");
        Self {
            tree: DirectoryTree::new(),
            errors: vec![error],
        }
    }

    /// True when every directory was read without error
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the root and build the nested tree.
    ///
    /// Never fails outright: an unusable root gives an empty tree with one
    /// error, and an unreadable sub-directory is left as an empty container
    /// while the rest of the walk goes on. Children are visited in file name
    /// order.
    pub fn walk(&self) -> TreeScan {
        if self.root.as_os_str().is_empty() {
            return TreeScan::failed(DirectoryReadError::MissingWorkspace);
        }

        match std::fs::metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                return TreeScan::failed(DirectoryReadError::unreadable(
                    &self.root,
                    format!("not a directory: {}", self.root.display()),
                ));
            }
            Err(e) => {
                return TreeScan::failed(DirectoryReadError::unreadable(
                    &self.root,
                    format!("{}: {}", e, self.root.display()),
                ));
            }
        }

        debug!(root = %self.root.display(), "Walking workspace tree");

        let mut scan = TreeScan::default();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_ignore(entry));

        for item in walker {
            match item {
                Ok(entry) => self.record(&mut scan.tree, entry.path(), entry.file_type().is_dir()),
                Err(e) if self.is_dangling_link(&e) => {
                    if let Some(path) = e.path() {
                        if !path.file_name().is_some_and(|name| self.is_ignored_name(name)) {
                            debug!(path = %path.display(), "Dangling symlink, recording as file");
                            self.record(&mut scan.tree, path, false);
                        }
                    }
                }
                Err(e) => {
                    let path = e.path().unwrap_or(&self.root).to_path_buf();
                    let error = DirectoryReadError::unreadable(path, e.to_string());
                    warn!(error = %error, "Skipping unreadable entry");
                    scan.errors.push(error);
                }
            }
        }

        let (dirs, files) = scan.tree.counts();
        debug!(dirs, files, errors = scan.errors.len(), "Workspace tree walk finished");
        scan
    }

    /// A followed symlink whose target cannot be resolved. Loops are not dangling.
    fn is_dangling_link(&self, error: &walkdir::Error) -> bool {
        if error.loop_ancestor().is_some() {
            return false;
        }
        error.path().is_some_and(|path| {
            std::fs::symlink_metadata(path).is_ok_and(|metadata| metadata.file_type().is_symlink())
                && std::fs::metadata(path).is_err()
        })
    }

    /// Place an entry under its parent container
    fn record(&self, tree: &mut DirectoryTree, path: &Path, is_dir: bool) {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            debug!(path = %path.display(), "Entry outside walk root, skipping");
            return;
        };

        let names: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((name, parents)) = names.split_last() else {
            return;
        };

        let Some(parent) = tree.container_mut(parents.iter().map(String::as_str)) else {
            debug!(path = %path.display(), "Parent not recorded, skipping");
            return;
        };

        // Lossy names can collide for non-UTF-8 siblings; the later one wins.
        if parent.get(name).is_some() {
            debug!(path = %path.display(), name = %name, "Entry name already recorded, replacing");
        }

        if is_dir {
            parent.insert_container(name.as_str());
        } else {
            parent.insert_leaf(name.as_str());
        }
    }

    /// Check if an entry's file name is on the ignore list
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        self.is_ignored_name(entry.file_name())
    }

    fn is_ignored_name(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.as_str() == name)
    }
}
