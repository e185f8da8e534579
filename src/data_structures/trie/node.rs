//! Node implementation for the prefix trie.
//!
//! This module provides the `Node` structure used by [`super::Trie`]. Each node
//! owns its children outright, so dropping a node releases its whole subtree.

use fnv::FnvHashMap;

/// A node in the prefix trie.
///
/// Each node represents one unit (byte) of a word path. The root node is an
/// empty anchor whose `key` carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// The unit on the edge from the parent to this node
    pub key: u8,

    /// Map of units to exclusively owned child nodes
    pub children: FnvHashMap<u8, Node>,

    /// Whether the path from the root to this node spells a stored word
    pub is_word: bool,
}

impl Node {
    /// Creates a new node for `key` with no children that does not mark a word.
    pub fn new(key: u8) -> Self {
        Self {
            key,
            children: FnvHashMap::default(),
            is_word: false,
        }
    }

    /// Creates the empty anchor used as the trie root.
    pub fn root() -> Self {
        Self::new(0)
    }

    /// Follows `path` one unit at a time, returning the node it ends on.
    pub fn descend(&self, path: &[u8]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, unit| node.children.get(unit))
    }

    /// Mutable counterpart of [`Node::descend`].
    pub fn descend_mut(&mut self, path: &[u8]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, unit| node.children.get_mut(unit))
    }

    /// A node that is childless and not a word marker supports nothing and
    /// must not stay in the tree.
    pub fn is_dead(&self) -> bool {
        self.children.is_empty() && !self.is_word
    }
}
