//! Dictionary configuration module.
//!
//! This module defines how the command-line driver reads its word list before
//! handing the words to the trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to a newline-separated word list (None when words come from the CLI)
    pub path: Option<PathBuf>,

    /// Whether to strip surrounding whitespace from each line
    pub trim: bool,

    /// Whether to ASCII-lowercase every word before insertion
    pub lowercase: bool,

    /// Lines starting with this marker are skipped
    pub comment_prefix: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            trim: true,
            lowercase: false,
            comment_prefix: Some("#".to_string()),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path cannot be empty".to_string(),
                ));
            }
        }

        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "comment_prefix cannot be empty, omit it to disable comments".to_string(),
            ));
        }

        Ok(())
    }
}
