//! Test modules for the prefix trie crate.
//!
//! This module contains the crate-level test suite:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Property-based trie tests using proptest against a set model
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod test_utils;
