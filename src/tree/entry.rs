//! Nested directory model produced by the walker

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Marker a leaf serializes to
pub const LEAF_MARKER: &str = "file";

/// A single named entry in the workspace tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    /// A directory and everything found beneath it
    Container(DirectoryTree),
    /// A plain file (or anything else that is not a directory)
    Leaf,
}

impl DirectoryEntry {
    pub fn is_container(&self) -> bool {
        matches!(self, DirectoryEntry::Container(_))
    }

    pub fn children(&self) -> Option<&DirectoryTree> {
        match self {
            DirectoryEntry::Container(tree) => Some(tree),
            DirectoryEntry::Leaf => None,
        }
    }
}

/// Ordered mapping from child name to entry.
///
/// Names are kept sorted, so two scans of an unchanged directory compare equal
/// and render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    entries: BTreeMap<String, DirectoryEntry>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn insert_leaf(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), DirectoryEntry::Leaf);
    }

    /// Insert an empty container (or keep the existing one) and return it
    pub fn insert_container(&mut self, name: impl Into<String>) -> &mut DirectoryTree {
        let entry = self
            .entries
            .entry(name.into())
            .or_insert_with(|| DirectoryEntry::Container(DirectoryTree::new()));
        if !entry.is_container() {
            *entry = DirectoryEntry::Container(DirectoryTree::new());
        }
        match entry {
            DirectoryEntry::Container(tree) => tree,
            DirectoryEntry::Leaf => unreachable!("entry was just made a container"),
        }
    }

    /// Walk down a chain of container names, returning the innermost one
    pub fn container_mut<'a, I>(&mut self, names: I) -> Option<&mut DirectoryTree>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for name in names {
            current = match current.entries.get_mut(name) {
                Some(DirectoryEntry::Container(tree)) => tree,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Total counts of (containers, leaves) across the whole subtree
    pub fn counts(&self) -> (usize, usize) {
        self.entries
            .values()
            .fold((0, 0), |(dirs, files), entry| match entry {
                DirectoryEntry::Container(tree) => {
                    let (d, f) = tree.counts();
                    (dirs + 1 + d, files + f)
                }
                DirectoryEntry::Leaf => (dirs, files + 1),
            })
    }
}

impl<'a> IntoIterator for &'a DirectoryTree {
    type Item = (&'a String, &'a DirectoryEntry);
    type IntoIter = btree_map::Iter<'a, String, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for DirectoryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl Serialize for DirectoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DirectoryEntry::Container(tree) => tree.serialize(serializer),
            DirectoryEntry::Leaf => serializer.serialize_str(LEAF_MARKER),
        }
    }
}
