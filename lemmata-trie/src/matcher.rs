//! Streaming longest-prefix matching over a radix tree

use smallvec::SmallVec;

use crate::{common_prefix_len, RadixNode};

/// How far the final path node's subkey has been matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPosition {
    /// The final node's subkey is fully matched; the next fed character
    /// must select a child.
    Exact,
    /// This many bytes of the final node's subkey are matched so far.
    Partial(usize),
}

/// Incremental longest-prefix matcher over a [`RadixTree`].
///
/// A matcher is fed text in arbitrary increments and tracks the deepest
/// tree path that is a prefix of the consumed input. Feeding in several
/// calls is equivalent to feeding the concatenation at once:
/// `feed(a); feed(b)` ≡ `feed(a + b)`.
///
/// Since tree nodes hold no parent references, the matcher records the
/// full root-to-node path it has taken; the matched key is reconstructed
/// from that path in O(depth).
///
/// Once a fed character cannot extend the match the matcher *fails*
/// permanently: further feeds consume nothing, while everything consumed
/// up to the failure remains valid and queryable.
///
/// [`RadixTree`]: crate::RadixTree
#[derive(Debug)]
pub struct PrefixMatch<'t, V> {
    /// Root-to-current path of visited nodes; never empty.
    path: SmallVec<[&'t RadixNode<V>; 8]>,
    position: MatchPosition,
    failed: bool,
}

impl<'t, V> Clone for PrefixMatch<'t, V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            position: self.position,
            failed: self.failed,
        }
    }
}

impl<'t, V> PrefixMatch<'t, V> {
    /// A fresh matcher seeded at `root` with nothing consumed yet.
    pub fn new(root: &'t RadixNode<V>) -> Self {
        let position = if root.subkey().is_empty() {
            MatchPosition::Exact
        } else {
            MatchPosition::Partial(0)
        };
        Self {
            path: SmallVec::from_slice(&[root]),
            position,
            failed: false,
        }
    }

    fn from_path(path: SmallVec<[&'t RadixNode<V>; 8]>) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            path,
            position: MatchPosition::Exact,
            failed: false,
        }
    }

    /// The deepest node on the path. Matched only partially when
    /// [`is_exact`](Self::is_exact) is false.
    pub fn node(&self) -> &'t RadixNode<V> {
        self.path.last().copied().expect("match path is never empty")
    }

    /// Number of path segments consumed so far, root included.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Continues matching against `chunk`, returning the number of bytes
    /// actually consumed.
    ///
    /// Characters are consumed until the chunk is exhausted or the match
    /// fails; on failure the unconsumed remainder is left unconsumed and
    /// every later feed returns 0.
    pub fn feed(&mut self, chunk: &str) -> usize {
        if self.failed {
            return 0;
        }
        let mut offset = 0;
        while offset < chunk.len() {
            let work = &chunk[offset..];
            let done = match self.position {
                MatchPosition::Exact => {
                    // The previous subkey is exhausted; the next character
                    // selects a child by determinant.
                    let Some(det) = work.chars().next() else { break };
                    let Some(child) = self.node().child(det) else {
                        self.failed = true;
                        break;
                    };
                    self.path.push(child);
                    0
                }
                MatchPosition::Partial(done) => done,
            };
            let pending = &self.node().subkey()[done..];
            let advanced = common_prefix_len(pending, work);
            offset += advanced;
            if advanced < pending.len() {
                self.position = MatchPosition::Partial(done + advanced);
                // A mismatch strictly inside the subkey fails the match;
                // running out of input mid-subkey does not.
                if advanced < work.len() {
                    self.failed = true;
                }
                break;
            }
            self.position = MatchPosition::Exact;
        }
        offset
    }

    /// Whether the path ends on a fully matched node (no partial tail).
    pub fn is_exact(&self) -> bool {
        matches!(self.position, MatchPosition::Exact)
    }

    /// Whether the match ends exactly on a node that carries a value.
    pub fn is_proper(&self) -> bool {
        self.is_exact() && self.node().is_proper()
    }

    /// Whether the match has concluded by encountering un-matchable input.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// A copy truncated to the first `segments` path nodes, in an exact,
    /// un-failed state. `None` when `segments` is 0.
    pub fn truncated(&self, segments: usize) -> Option<Self> {
        if segments == 0 {
            return None;
        }
        Some(Self::from_path(SmallVec::from_slice(&self.path[..segments])))
    }

    /// The longest match whose final node satisfies `predicate`.
    ///
    /// Only exactly matched nodes are considered unless `allow_partial`
    /// is set; a trailing partially matched node is otherwise skipped
    /// (every non-final path node is exactly matched by construction).
    pub fn longest_match<P>(&self, mut predicate: P, allow_partial: bool) -> Option<Self>
    where
        P: FnMut(&RadixNode<V>) -> bool,
    {
        let mut depth = self.path.len();
        if !allow_partial && !self.is_exact() {
            depth -= 1;
        }
        while depth > 0 {
            if predicate(self.path[depth - 1]) {
                return self.truncated(depth);
            }
            depth -= 1;
        }
        None
    }

    /// The longest proper match: the deepest exactly matched node that
    /// carries a value. `None` when no dictionary entry prefixes the fed
    /// input.
    pub fn proper(&self) -> Option<Self> {
        self.longest_match(RadixNode::is_proper, false)
    }

    /// The matcher truncated to the deepest *exactly* matched node: the
    /// matcher itself when already exact, one level up when the final
    /// node is partial, and `None` when only a partially matched root
    /// remains.
    pub fn exact(&self) -> Option<Self> {
        if self.is_exact() {
            Some(self.clone())
        } else {
            self.truncated(self.path.len() - 1)
        }
    }

    /// The matched key, reconstructed from the path subkeys and trimmed
    /// of any partial tail remainder.
    pub fn key(&self) -> String {
        let mut key: String = self.path.iter().map(|node| node.subkey()).collect();
        if let MatchPosition::Partial(done) = self.position {
            key.truncate(key.len() - (self.node().subkey().len() - done));
        }
        key
    }

    /// Byte length of the matched key, without building the string.
    pub fn key_len(&self) -> usize {
        let total: usize = self.path.iter().map(|node| node.subkey().len()).sum();
        match self.position {
            MatchPosition::Exact => total,
            MatchPosition::Partial(done) => total - (self.node().subkey().len() - done),
        }
    }

    /// The value at the deepest path node. Meaningful on proper matches;
    /// a partially matched final node yields that node's value regardless.
    pub fn value(&self) -> Option<&'t V> {
        self.node().value()
    }
}
