//! Error types for cv-rank.
//!
//! Scoring itself is total over its inputs: empty token sequences and zero
//! magnitudes score 0.0 instead of failing. The only failures the core can
//! report are caller-input errors; decoding and I/O failures come from the
//! protocol adapter and the binary.
//!
//! # Examples
//!
//! ```
//! use cv_rank::error::{MatchError, Result};
//!
//! fn check(query: &str) -> Result<()> {
//!     if query.is_empty() {
//!         return Err(MatchError::missing_input("job_description"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The error type for ranking and weighting operations.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Query document or candidate collection absent or empty
    #[error("Missing {0}")]
    MissingInput(String),

    /// Payload could not be decoded into the expected request shape
    #[error("Invalid JSON input: {0}")]
    MalformedRequest(String),

    /// Configuration file rejected
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors (stdin, stdout, config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MatchError {
    /// Create a missing input error naming the absent field.
    pub fn missing_input<S: Into<String>>(field: S) -> Self {
        MatchError::MissingInput(field.into())
    }

    /// Create a malformed request error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        MatchError::MalformedRequest(msg.into())
    }

    /// Create a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MatchError::Config(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MatchError::MissingInput(_) | MatchError::MalformedRequest(_))
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::MalformedRequest(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
