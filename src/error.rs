//! Error types for the Spellbound library.
//!
//! All fallible operations return [`SpellboundError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use spellbound::error::{Result, SpellboundError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellboundError::invalid_input("Non-alpha word: 42"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spellbound operations.
#[derive(Error, Debug)]
pub enum SpellboundError {
    /// I/O errors (dictionary and input file reads, output writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing, empty or malformed corrector configuration. Fatal to
    /// constructing a corrector.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A query word that is empty or not purely alphabetic once trimmed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unparseable dictionary record
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellboundError.
pub type Result<T> = std::result::Result<T, SpellboundError>;

impl SpellboundError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        SpellboundError::Configuration(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SpellboundError::InvalidInput(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpellboundError::Dictionary(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        SpellboundError::OperationCancelled(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellboundError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SpellboundError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Whether this error rejects a single query word rather than the whole run.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SpellboundError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellboundError::configuration("empty dictionary");
        assert_eq!(error.to_string(), "Configuration error: empty dictionary");

        let error = SpellboundError::invalid_input("Non-alpha word: 42");
        assert_eq!(error.to_string(), "Invalid input: Non-alpha word: 42");
        assert!(error.is_invalid_input());

        let error = SpellboundError::internal("pool");
        assert_eq!(error.to_string(), "Error: Internal error: pool");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpellboundError::from(io_error);

        match error {
            SpellboundError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
