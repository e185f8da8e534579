//! Depth-first word enumeration over a trie subtree.

use super::node::Node;

/// Iterator over every word stored below a prefix node.
///
/// Traversal uses an explicit stack instead of recursion. Each stack entry
/// records the word length at which its node's unit sits, so the shared buffer
/// is truncated back to the right depth before the unit is appended. Yield order
/// follows the children map iteration order and is not meaningful.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Word being assembled, starting with the prefix
    buf: Vec<u8>,

    /// Pending nodes paired with the buffer length they extend to
    stack: Vec<(usize, &'a Node)>,

    /// Whether the prefix node itself is a word that has not been yielded yet
    pending_prefix: bool,
}

impl<'a> Words<'a> {
    /// Creates an iterator rooted at `start`, the node reached by `prefix`.
    pub(crate) fn new(prefix: &[u8], start: &'a Node) -> Self {
        let depth = prefix.len() + 1;
        Self {
            buf: prefix.to_vec(),
            stack: start.children.values().map(|child| (depth, child)).collect(),
            pending_prefix: start.is_word,
        }
    }

    /// An iterator that yields nothing, used when the prefix is absent.
    pub(crate) fn empty() -> Self {
        Self {
            buf: Vec::new(),
            stack: Vec::new(),
            pending_prefix: false,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_prefix {
            self.pending_prefix = false;
            return Some(self.buf.clone());
        }

        while let Some((depth, node)) = self.stack.pop() {
            self.buf.truncate(depth - 1);
            self.buf.push(node.key);

            self.stack
                .extend(node.children.values().map(|child| (depth + 1, child)));

            if node.is_word {
                return Some(self.buf.clone());
            }
        }

        None
    }
}

impl std::iter::FusedIterator for Words<'_> {}
