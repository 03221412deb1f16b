//! Error types for Libris Core

use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Top-level error type for all Libris operations
#[derive(Debug, Error)]
pub enum LibrisError {
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Remote lookup error: {0}")]
    Remote(#[from] RemoteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the inventory operations
///
/// All of these are terminal for the interaction and carry a message
/// suitable for showing to the operator directly.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No book with ID '{0}'")]
    NotFound(String),

    #[error("A book with ID '{0}' already exists")]
    DuplicateKey(String),

    #[error("Book '{0}' is already issued")]
    AlreadyIssued(String),

    #[error("Book '{0}' is not issued")]
    NotIssued(String),
}

/// Errors from the record store and image directory
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Table codec error: {0}")]
    Codec(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// Errors from the external catalog lookup
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Search service returned HTTP {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
