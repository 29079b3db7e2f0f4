//! Common error types for parameter stores

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing parameters
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key is empty or would escape the parameter directory
    #[error("Invalid parameter key: {0:?}")]
    InvalidKey(String),

    /// Reading the stored value failed
    #[error("Failed to read parameter {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Persisting the value failed
    #[error("Failed to write parameter {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Store could not be reached at all
    #[error("Parameter store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Key the error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreError::InvalidKey(key) => Some(key),
            StoreError::Read { key, .. } | StoreError::Write { key, .. } => Some(key),
            StoreError::Unavailable(_) => None,
        }
    }
}
