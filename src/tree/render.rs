//! Text renderings of a [`DirectoryTree`]

use crate::error::PathyError;
use crate::tree::entry::{DirectoryEntry, DirectoryTree};
use std::fmt::Write;

/// Pretty JSON with a 2-space indent, leaves rendered as `"file"`
pub fn to_json(tree: &DirectoryTree) -> Result<String, PathyError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Indented listing, one entry per line, directories suffixed with `/`
pub fn to_text(tree: &DirectoryTree) -> String {
    let mut out = String::new();
    write_level(&mut out, tree, 0);
    out
}

fn write_level(out: &mut String, tree: &DirectoryTree, depth: usize) {
    for (name, entry) in tree {
        let indent = "  ".repeat(depth);
        match entry {
            DirectoryEntry::Container(children) => {
                let _ = writeln!(out, "{}{}/", indent, name);
                write_level(out, children, depth + 1);
            }
            DirectoryEntry::Leaf => {
                let _ = writeln!(out, "{}{}", indent, name);
            }
        }
    }
}
