//! Storage error types.

use thiserror::Error;

/// Errors that can occur while fetching an object from storage.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The object does not exist.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to read the object.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The request or the body transfer failed.
    #[error("Transfer error: {0}")]
    TransferError(String),
}

impl StorageError {
    /// Create a not found error for the given bucket and key.
    pub fn not_found(bucket: &str, key: &str) -> Self {
        Self::NotFound(format!("s3://{}/{}", bucket, key))
    }

    /// Create an access denied error for the given bucket and key.
    pub fn access_denied(bucket: &str, key: &str) -> Self {
        Self::AccessDenied(format!("s3://{}/{}", bucket, key))
    }

    /// Create a transfer error.
    pub fn transfer(msg: impl Into<String>) -> Self {
        Self::TransferError(msg.into())
    }
}
