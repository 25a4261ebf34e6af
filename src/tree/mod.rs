//! Workspace Tree
//!
//! Mirrors the workspace directory as a nested name-to-entry mapping, where
//! each entry is either a container (sub-directory) or a leaf (file). The tree
//! is rebuilt from the filesystem on every request.

pub mod entry;
pub mod render;
pub mod walker;

pub use entry::{DirectoryEntry, DirectoryTree, LEAF_MARKER};
pub use walker::{TreeScan, Walker, WalkerConfig};
