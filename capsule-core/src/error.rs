//! Error types for capsule snapshots.

use thiserror::Error;

/// Errors that can occur while building or executing a snapshot.
#[derive(Error, Debug)]
pub enum CapsuleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Two plan entries share the archive path '{0}'")]
    PathCollision(String),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A fetch capability failed to deliver a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Result type alias for capsule operations.
pub type CapsuleResult<T> = Result<T, CapsuleError>;
