//! Error taxonomy for a single invocation.
//!
//! Each variant names the pipeline step that failed. The first failure aborts
//! the invocation and is returned unchanged to the Lambda runtime.

use document_indexer_repository::{SearchIndexError, StorageError};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while processing one notification.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The event has no usable bucket name or object key.
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// The object could not be fetched from storage.
    #[error("Object fetch error: {0}")]
    ObjectFetch(#[from] StorageError),

    /// The object content is not valid UTF-8.
    #[error("Decode error: {0}")]
    Decode(#[from] FromUtf8Error),

    /// The object content is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Signing credentials or the signed connection could not be set up.
    #[error("Auth error: {0}")]
    Auth(#[source] SearchIndexError),

    /// The search engine did not accept the document.
    #[error("Index error: {0}")]
    Index(#[source] SearchIndexError),
}

impl ProcessError {
    /// Create a malformed event error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedEvent(msg.into())
    }
}
