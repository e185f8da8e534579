//! Data structures for the prefix trie crate.
//!
//! This module contains the trie itself. It is single-threaded and owns its
//! nodes outright; callers that need sharing add their own locking.

pub mod trie;

// Re-export common data structures
pub use trie::{Node, Trie, Words};
