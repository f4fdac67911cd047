//! Root wrapper over the radix node structure

use crate::{PrefixMatch, RadixNode};

/// A compressed radix tree mapping string keys to values.
///
/// The tree is kept maximally compressed across every mutation: no
/// reachable non-root node ever has both no value and exactly one child.
/// An empty tree holds no root node at all.
///
/// Lookups never fail loudly — a missing key is simply `None` — and
/// matchers obtained from [`RadixTree::match_prefix`] borrow the tree, so
/// the borrow checker rules out mutation while a match is in flight.
#[derive(Debug, Clone, Default)]
pub struct RadixTree<V> {
    root: Option<RadixNode<V>>,
}

impl<V> RadixTree<V> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, when the tree is non-empty.
    pub fn root(&self) -> Option<&RadixNode<V>> {
        self.root.as_ref()
    }

    /// Associates `value` with `key`, overwriting any previous value.
    pub fn set(&mut self, key: &str, value: V) {
        self.set_impl(key, value, true);
    }

    /// Associates `value` with `key` unless the key already has a value.
    pub fn set_if_absent(&mut self, key: &str, value: V) {
        self.set_impl(key, value, false);
    }

    fn set_impl(&mut self, key: &str, value: V, update: bool) {
        match &mut self.root {
            Some(root) => root.set(key, value, update),
            None => self.root = Some(RadixNode::new(key, Some(value))),
        }
    }

    /// Removes `key`, merging or pruning whatever structure the removal
    /// leaves behind. Removing a missing key is a no-op.
    pub fn remove(&mut self, key: &str) {
        if let Some(root) = &mut self.root {
            if !root.remove(key) {
                self.root = None;
            }
        }
    }

    /// The value stored under `key`, requiring an exact match.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.root.as_ref()?.find(key)?.value()
    }

    /// Whether `key` exists *and* carries a value.
    pub fn has(&self, key: &str) -> bool {
        self.root
            .as_ref()
            .and_then(|root| root.find(key))
            .is_some_and(RadixNode::is_proper)
    }

    /// Finds the node matching `key` exactly, proper or not.
    pub fn find(&self, key: &str) -> Option<&RadixNode<V>> {
        self.root.as_ref()?.find(key)
    }

    /// A fresh matcher seeded at the root, ready to be fed text
    /// incrementally. `None` on an empty tree.
    pub fn matcher(&self) -> Option<PrefixMatch<'_, V>> {
        self.root.as_ref().map(PrefixMatch::new)
    }

    /// Matches `text` against the tree in one call, returning the matcher
    /// in its final state. `None` on an empty tree.
    pub fn match_prefix(&self, text: &str) -> Option<PrefixMatch<'_, V>> {
        let mut matched = self.matcher()?;
        matched.feed(text);
        Some(matched)
    }

    /// Rebalances the entire tree post-order. Mutating operations keep the
    /// tree balanced on their own; this is for callers that edited nodes
    /// in bulk through other means.
    pub fn rebalance(&mut self) {
        if let Some(root) = &mut self.root {
            if !root.rebalance() {
                self.root = None;
            }
        }
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<V> FromIterator<(String, V)> for RadixTree<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(entries: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in entries {
            tree.set(&key, value);
        }
        tree
    }
}
