//! Error types for list, storage and configuration operations.

use thiserror::Error;

/// Rejected list mutations. Neither variant changes the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Invalid input: item text must not be empty")]
    EmptyItem,

    #[error("Index {index} out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to write slot `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
