//! Test utilities and fixtures for the prefix trie crate.
//!
//! This module provides proptest strategies for words and trie operations, and
//! a fixture for tests that need files and environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 8;

/// Generate words over a small alphabet so that generated words share
/// prefixes often and deletes exercise pruning against live siblings.
///
/// Empty words are included on purpose.
pub fn word_strategy() -> BoxedStrategy<Vec<u8>> {
    proptest::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..MAX_WORD_LENGTH)
        .boxed()
}

/// A single mutation applied to both the trie and its model.
#[derive(Debug, Clone)]
pub enum Op {
    /// Insert a word
    Insert(Vec<u8>),
    /// Delete a word
    Delete(Vec<u8>),
}

/// Generate a random insert or delete, biased towards inserts.
pub fn op_strategy() -> BoxedStrategy<Op> {
    prop_oneof![
        3 => word_strategy().prop_map(Op::Insert),
        2 => word_strategy().prop_map(Op::Delete),
    ]
    .boxed()
}

/// Test fixture for tests requiring files on disk or environment overrides.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
