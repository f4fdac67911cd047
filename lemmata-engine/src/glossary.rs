//! Dictionary index built over the radix tree

use lemmata_trie::RadixTree;
use tracing::warn;

/// Normalizes a dictionary term: surrounding whitespace trimmed, simple
/// lowercase. Every key entering a [`Glossary`] passes through this, and
/// exact lookups apply it too, so callers may pass terms as they appear
/// in text.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// A glossary of terms mapped to values, rebuilt in bulk from whatever
/// source the caller parses entries out of.
///
/// Prefix matching with [`Glossary::find`] runs against already-folded
/// text and is *not* normalized here — the scanner folds whole lines and
/// needs byte offsets to survive the lookup.
#[derive(Debug, Clone, Default)]
pub struct Glossary<V> {
    tree: RadixTree<V>,
}

impl<V> Glossary<V> {
    /// An empty glossary.
    pub fn new() -> Self {
        Self {
            tree: RadixTree::new(),
        }
    }

    /// Bulk-loads `entries`, normalizing every key. Duplicate keys follow
    /// last-write-wins; entries whose key normalizes to nothing are
    /// skipped. With `clear` set the previous contents are dropped first.
    pub fn build<I>(&mut self, entries: I, clear: bool)
    where
        I: IntoIterator<Item = (String, V)>,
    {
        if clear {
            self.tree.clear();
        }
        for (key, value) in entries {
            let key = normalize_term(&key);
            if key.is_empty() {
                warn!("skipping glossary entry with an empty key");
                continue;
            }
            self.tree.set(&key, value);
        }
    }

    /// Inserts a single term.
    pub fn insert(&mut self, term: &str, value: V) {
        let key = normalize_term(term);
        if key.is_empty() {
            warn!("skipping glossary entry with an empty key");
            return;
        }
        self.tree.set(&key, value);
    }

    /// The value for `term`, matched exactly after normalization.
    pub fn get(&self, term: &str) -> Option<&V> {
        self.tree.get(&normalize_term(term))
    }

    /// Whether `term` has an entry.
    pub fn has(&self, term: &str) -> bool {
        self.tree.has(&normalize_term(term))
    }

    /// The longest glossary term that is a prefix of `text`, as
    /// `(byte length, value)`; `(0, None)` when nothing matches.
    ///
    /// `text` is matched as-is — fold it first when scanning prose.
    pub fn find(&self, text: &str) -> (usize, Option<&V>) {
        let Some(matched) = self.tree.match_prefix(text) else {
            return (0, None);
        };
        match matched.proper() {
            Some(proper) => (proper.key_len(), proper.value()),
            None => (0, None),
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Whether the glossary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree, for callers driving a matcher by hand.
    pub fn tree(&self) -> &RadixTree<V> {
        &self.tree
    }
}
