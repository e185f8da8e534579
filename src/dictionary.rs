//! Word list loading.
//!
//! Builds a [`Trie`] from newline-separated text, one word per line. This is
//! caller-side plumbing: the trie itself has no file format.

use crate::config::DictionaryConfig;
use crate::data_structures::Trie;
use crate::error::TrieToolResult;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Loader that turns word lists into tries according to a [`DictionaryConfig`].
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    config: DictionaryConfig,
}

impl Dictionary {
    /// Creates a loader using the given configuration.
    pub fn new(config: DictionaryConfig) -> Self {
        Self { config }
    }

    /// Reads words from `reader`, one per line.
    ///
    /// Blank lines and lines starting with the configured comment marker are
    /// skipped. Lines are read as raw bytes, so non-UTF-8 input is accepted.
    pub fn from_reader<R: Read>(&self, reader: R) -> TrieToolResult<Trie> {
        let mut trie = Trie::new();
        let comment = self.config.comment_prefix.as_deref().map(str::as_bytes);

        for line in BufReader::new(reader).split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let mut word: &[u8] = &line;
            if self.config.trim {
                word = word.trim_ascii();
            }
            if word.is_empty() || comment.is_some_and(|marker| word.starts_with(marker)) {
                continue;
            }

            if self.config.lowercase {
                trie.insert(word.to_ascii_lowercase());
            } else {
                trie.insert(word);
            }
        }

        tracing::debug!(words = trie.len(), "dictionary loaded");
        Ok(trie)
    }

    /// Opens `path` and reads it with [`Dictionary::from_reader`].
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> TrieToolResult<Trie> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading dictionary");
        self.from_reader(File::open(path)?)
    }
}
