//! Property-based tests for tree enumeration determinism

use pathy::tree::{DirectoryEntry, Walker};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scans_are_repeatable_and_complete(
        files in prop::collection::btree_set("[a-z]{1,6}\\.txt", 0..6),
        dirs in prop::collection::btree_set("[a-z]{1,6}", 0..4),
    ) {
        let temp_dir = TempDir::new().unwrap();
        for dir in &dirs {
            fs::create_dir(temp_dir.path().join(dir)).unwrap();
            fs::write(temp_dir.path().join(dir).join("inner.txt"), "").unwrap();
        }
        for file in &files {
            fs::write(temp_dir.path().join(file), "").unwrap();
        }

        let walker = Walker::new(temp_dir.path().to_path_buf());
        let first = walker.walk();
        let second = walker.walk();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_complete());

        let names: BTreeSet<String> = first.tree.iter().map(|(name, _)| name.clone()).collect();
        let expected: BTreeSet<String> = files.union(&dirs).cloned().collect();
        prop_assert_eq!(names, expected);

        for dir in &dirs {
            let children = first.tree.get(dir).and_then(DirectoryEntry::children).unwrap();
            prop_assert_eq!(children.get("inner.txt"), Some(&DirectoryEntry::Leaf));
        }
    }
}
