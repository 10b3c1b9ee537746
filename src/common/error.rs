//! Error types for the Fibonacci CLI
//!
//! Messages are meant to be read directly on the terminal, so they say what
//! went wrong and, where it helps, how to get past it.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Count must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("{what} {value} exceeds the configured limit of {limit}. Raise 'limits' in the config file to allow it")]
    LimitExceeded {
        what: String,
        value: u64,
        limit: u64,
    },

    // === Arithmetic Errors ===
    #[error("Fibonacci number at index {index} does not fit in 64 bits")]
    Overflow { index: u64 },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a limit exceeded error
    pub fn limit_exceeded(what: &str, value: u64, limit: u64) -> Self {
        Self::LimitExceeded {
            what: what.to_string(),
            value,
            limit,
        }
    }

    /// Create an overflow error for the given Fibonacci index
    pub fn overflow(index: impl Into<u64>) -> Self {
        Self::Overflow {
            index: index.into(),
        }
    }
}
