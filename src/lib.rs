//! Prefix Trie Library
//!
//! This library contains a byte-oriented prefix tree together with the layers
//! the `prefix_trie` binary builds around it: word list loading, layered
//! configuration and error reporting.
//!
//! # Architecture
//!
//! - [`data_structures::Trie`] is the core. Its operations are infallible and
//!   single-threaded; it never logs above `debug`.
//! - [`dictionary`] feeds a trie from newline-separated word lists.
//! - [`config`] and [`error`] serve the command-line driver.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::Trie;

/// Version information for the prefix trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
