//! Centralized error types for aigraphcodescan.

use thiserror::Error;

/// Main error type for scan operations.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph-RAG engine error: {0}")]
    Engine(String),

    #[error("No valid JSON after {attempts} attempt(s): {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

impl ScanError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a graph-RAG engine error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}
