//! Error types for the wordgrep library.
//!
//! All errors are represented by the [`GrepError`] enum. Callers that sit at a
//! request boundary use [`GrepError::is_user_error`] to tell a bad pattern
//! (render a validation message) apart from a server fault (word list
//! unreadable).
//!
//! # Examples
//!
//! ```
//! use wordgrep::error::{GrepError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GrepError::invalid_pattern("unclosed character class"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordgrep operations.
#[derive(Error, Debug)]
pub enum GrepError {
    /// I/O errors while reading the word list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The pattern failed to compile in the supported regex dialect.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration values that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Thread pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Error carrying added context, e.g. which configuration file failed
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GrepError.
pub type Result<T> = std::result::Result<T, GrepError>;

impl GrepError {
    /// Create a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        GrepError::InvalidPattern(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GrepError::InvalidConfig(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        GrepError::ThreadPool(msg.into())
    }

    /// Whether this error was caused by user input rather than the server.
    pub fn is_user_error(&self) -> bool {
        matches!(self, GrepError::InvalidPattern(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GrepError::invalid_pattern("unclosed group");
        assert_eq!(error.to_string(), "Invalid pattern: unclosed group");

        let error = GrepError::invalid_config("size_limit must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: size_limit must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let grep_error = GrepError::from(io_error);

        match grep_error {
            GrepError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_context_is_displayed() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error: GrepError = anyhow::Error::new(GrepError::from(io_error))
            .context("failed to load configuration wordgrep.json")
            .into();

        assert_eq!(
            error.to_string(),
            "failed to load configuration wordgrep.json: I/O error: missing"
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(GrepError::invalid_pattern("bad").is_user_error());

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(!GrepError::from(io_error).is_user_error());
        assert!(!GrepError::thread_pool("boom").is_user_error());
    }
}
