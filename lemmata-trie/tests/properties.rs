//! Property tests for the radix tree core

use std::collections::{BTreeMap, BTreeSet};

use lemmata_trie::{RadixNode, RadixTree};
use proptest::prelude::*;

/// Every reachable non-root node must be proper or have at least two
/// children; single-child valueless chains and valueless leaves are
/// structural defects.
fn assert_compressed<V>(node: &RadixNode<V>, is_root: bool) {
    if !is_root {
        assert!(!node.subkey().is_empty(), "non-root node with empty subkey");
        assert!(
            node.is_proper() || node.child_count() >= 2,
            "valueless node with {} children",
            node.child_count()
        );
    }
    for child in node.children() {
        assert_compressed(child, false);
    }
}

proptest! {
    #[test]
    fn set_then_get_round_trips(keys in prop::collection::vec("[a-c]{1,8}", 1..16)) {
        let mut tree = RadixTree::new();
        let mut expected = BTreeMap::new();
        for (index, key) in keys.iter().enumerate() {
            tree.set(key, index);
            expected.insert(key.clone(), index);
        }
        // Duplicate keys follow last-write-wins.
        for (key, index) in &expected {
            prop_assert_eq!(tree.get(key).copied(), Some(*index));
            prop_assert!(tree.has(key));
        }
        if let Some(root) = tree.root() {
            assert_compressed(root, true);
        }
    }

    #[test]
    fn removal_forgets_only_the_removed_keys(
        keys in prop::collection::vec("[a-c]{1,8}", 1..16),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let unique: BTreeSet<String> = keys.into_iter().collect();
        let mut tree = RadixTree::new();
        for key in &unique {
            tree.set(key, key.len());
        }
        let removed: BTreeSet<&String> = unique
            .iter()
            .zip(mask.iter().cycle())
            .filter(|&(_, &remove)| remove)
            .map(|(key, _)| key)
            .collect();
        for key in &removed {
            tree.remove(key);
        }

        for key in &unique {
            if removed.contains(key) {
                prop_assert!(!tree.has(key));
                prop_assert_eq!(tree.get(key), None);
            } else {
                prop_assert_eq!(tree.get(key).copied(), Some(key.len()));
            }
        }
        if let Some(root) = tree.root() {
            assert_compressed(root, true);
        }
    }

    #[test]
    fn tree_stays_compressed_under_mixed_edits(
        ops in prop::collection::vec(("[a-c]{1,6}", any::<bool>()), 1..32),
    ) {
        let mut tree = RadixTree::new();
        for (key, insert) in &ops {
            if *insert {
                tree.set(key, 1u8);
            } else {
                tree.remove(key);
            }
            if let Some(root) = tree.root() {
                assert_compressed(root, true);
            }
        }
    }

    #[test]
    fn split_feeding_equals_whole_feeding(
        keys in prop::collection::vec("[a-c]{1,8}", 1..16),
        input in "[a-c]{0,12}",
        split in any::<prop::sample::Index>(),
    ) {
        let tree: RadixTree<usize> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();
        let whole = tree.match_prefix(&input).expect("tree is non-empty");

        let boundaries: Vec<usize> = input
            .char_indices()
            .map(|(offset, _)| offset)
            .chain([input.len()])
            .collect();
        let at = boundaries[split.index(boundaries.len())];

        let mut incremental = tree.matcher().expect("tree is non-empty");
        incremental.feed(&input[..at]);
        incremental.feed(&input[at..]);

        prop_assert_eq!(incremental.is_exact(), whole.is_exact());
        prop_assert_eq!(incremental.is_failed(), whole.is_failed());
        prop_assert_eq!(incremental.key(), whole.key());
        prop_assert_eq!(incremental.key_len(), whole.key_len());
        prop_assert_eq!(incremental.value(), whole.value());
    }

    #[test]
    fn char_by_char_feeding_equals_whole_feeding(
        keys in prop::collection::vec("[a-c]{1,8}", 1..16),
        input in "[a-c]{0,12}",
    ) {
        let tree: RadixTree<usize> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();
        let whole = tree.match_prefix(&input).expect("tree is non-empty");

        let mut incremental = tree.matcher().expect("tree is non-empty");
        let mut buf = [0u8; 4];
        for ch in input.chars() {
            incremental.feed(ch.encode_utf8(&mut buf));
        }

        prop_assert_eq!(incremental.is_exact(), whole.is_exact());
        prop_assert_eq!(incremental.is_failed(), whole.is_failed());
        prop_assert_eq!(incremental.key(), whole.key());
        prop_assert_eq!(incremental.value(), whole.value());
    }
}
