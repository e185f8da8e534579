//! Prefix Trie Implementation
//!
//! This module provides a byte-oriented prefix tree supporting insertion, exact
//! lookup, prefix checks, enumeration of every word under a prefix, and deletion
//! that prunes branches left without words.
//!
//! Words are any `AsRef<[u8]>` (so `&str`, `String` and byte slices all work)
//! and are consumed one byte per tree level. The empty word is never stored:
//! inserting or deleting it is a no-op and looking it up always fails, while the
//! empty prefix matches every stored word.
//!
//! The trie is a plain owned tree with no internal locking. Share it between
//! threads by wrapping it in a lock of the caller's choosing.

mod iter;
mod node;

pub use iter::Words;
pub use node::Node;

/// A prefix tree over byte sequences.
///
/// # Examples
///
/// ```
/// use prefix_trie_lib::data_structures::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("cap");
/// trie.insert("captain");
///
/// trie.delete("cap");
/// assert!(!trie.contains("cap"));
/// assert!(trie.contains_prefix("cap"));
/// assert_eq!(trie.words_with_prefix("cap"), vec![b"captain".to_vec()]);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    /// The root node, representing the empty string
    root: Node,

    /// Number of stored words
    len: usize,
}

impl Trie {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
        }
    }

    /// Inserts a word into the trie, creating any missing nodes along its path.
    ///
    /// # Returns
    ///
    /// `true` if the word was not already stored. Inserting the empty word
    /// leaves the trie untouched and returns `false`.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<[u8]>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for &unit in word {
            node = node
                .children
                .entry(unit)
                .or_insert_with(|| Node::new(unit));
        }

        let is_new = !node.is_word;
        node.is_word = true;
        if is_new {
            self.len += 1;
        }

        is_new
    }

    /// Checks whether `word` is stored in the trie.
    ///
    /// The empty word is never stored, so it always yields `false`.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<[u8]>,
    {
        let word = word.as_ref();
        !word.is_empty() && self.root.descend(word).is_some_and(|node| node.is_word)
    }

    /// Checks whether any path in the trie starts with `prefix`.
    ///
    /// This only tests that the path exists; use [`Trie::words_with_prefix`] to
    /// get the words themselves. The empty prefix always matches.
    pub fn contains_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<[u8]>,
    {
        self.root.descend(prefix.as_ref()).is_some()
    }

    /// Returns every stored word that starts with `prefix`, including `prefix`
    /// itself when it is a stored word.
    ///
    /// The order of the returned words is unspecified. An absent prefix yields
    /// an empty vector.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<Vec<u8>>
    where
        P: AsRef<[u8]>,
    {
        self.iter_prefix(prefix).collect()
    }

    /// Like [`Trie::words_with_prefix`], decoding each word as UTF-8 and
    /// replacing invalid sequences.
    pub fn words_with_prefix_lossy<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<[u8]>,
    {
        self.iter_prefix(prefix)
            .map(|word| String::from_utf8_lossy(&word).into_owned())
            .collect()
    }

    /// Lazily iterates over the stored words that start with `prefix`.
    pub fn iter_prefix<P>(&self, prefix: P) -> Words<'_>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        match self.root.descend(prefix) {
            Some(node) => Words::new(prefix, node),
            None => Words::empty(),
        }
    }

    /// Lazily iterates over every stored word.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&[], &self.root)
    }

    /// Removes a word from the trie and prunes the nodes it leaves behind.
    ///
    /// Deleting a word that was never stored, or the empty word, is a no-op.
    /// Nodes still supporting another word, or marking one, are kept.
    ///
    /// # Returns
    ///
    /// `true` if a stored word was removed.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<[u8]>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let Some(node) = self.root.descend_mut(word) else {
            tracing::trace!(len = word.len(), "delete of absent path ignored");
            return false;
        };

        let was_word = node.is_word;
        node.is_word = false;
        if was_word {
            self.len -= 1;
        }

        if let Some(cut) = self.dead_suffix_start(word) {
            tracing::debug!(depth = cut, len = word.len(), "pruning dead suffix");
            if let Some(parent) = self.root.descend_mut(&word[..cut]) {
                parent.children.remove(&word[cut]);
            }
        }

        was_word
    }

    /// Finds the index of the first unit of the dead chain ending at `word`.
    ///
    /// Walking the path, a node is part of the chain when it is not a word and
    /// its only child (if any) is the next node on the path. The chain must reach
    /// the last node, so any live node resets it. Detaching the node at the
    /// returned index drops exactly the nodes a deepest-first pruning scan would
    /// remove one by one.
    fn dead_suffix_start(&self, word: &[u8]) -> Option<usize> {
        let last = word.len().checked_sub(1)?;
        let mut node = &self.root;
        let mut start = None;

        for (index, unit) in word.iter().enumerate() {
            node = node.children.get(unit)?;

            let expected_children = if index == last { 0 } else { 1 };
            if !node.is_word && node.children.len() == expected_children {
                start.get_or_insert(index);
            } else {
                start = None;
            }
        }

        start
    }

    /// The root node, for structural checks in tests.
    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = Node::root();
        self.len = 0;
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Extend<W> for Trie
where
    W: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<W> FromIterator<W> for Trie
where
    W: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = Vec<u8>;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
