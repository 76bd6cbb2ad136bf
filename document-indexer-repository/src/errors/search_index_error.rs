//! Search index error types.
//!
//! This module defines the error types that can occur while connecting to the
//! search engine or submitting a document to it.

use thiserror::Error;

/// Errors that can occur during search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Signing credentials could not be obtained.
    #[error("Auth error: {0}")]
    AuthError(String),

    /// Failed to build the signed transport to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The index request could not be completed.
    #[error("Index error: {0}")]
    IndexError(String),

    /// The search engine answered the index request with a non-success status.
    #[error("Index request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl SearchIndexError {
    /// Create an auth error.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::AuthError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a rejected request error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}
