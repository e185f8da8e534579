//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::{ErrorContext, ErrorReporter, TracingErrorReporter, TrieToolError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = TrieToolError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = TrieToolError::from(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error = TrieToolError::from(ConfigError::FileNotFound(PathBuf::from("trie.toml")));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration file not found: trie.toml"
    );
}

/// Test the config error messages.
#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("bad toml".to_string());
    assert_eq!(err.to_string(), "Failed to parse configuration file: bad toml");

    let err = ConfigError::ValidationError("Invalid log level: loud".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration validation error: Invalid log level: loud"
    );
}

/// Counting reporter for testing.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that reporters are usable as trait objects.
#[test]
fn test_reporter_trait_object() {
    let counting = Arc::new(CountingReporter::default());
    let reporter: Arc<dyn ErrorReporter> = counting.clone();

    reporter.report(ErrorContext::new(
        TrieToolError::Custom("first".to_string()),
        "test_component",
    ));
    reporter.report(ErrorContext::new(
        TrieToolError::Custom("second".to_string()),
        "test_component",
    ));

    assert_eq!(counting.reported_count.load(Ordering::SeqCst), 2);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = TrieToolError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
