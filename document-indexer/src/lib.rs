//! # Document Indexer
//!
//! Lambda function that reacts to S3 object-creation notifications, fetches
//! the new object, parses it as JSON and indexes it into OpenSearch.
//!
//! Every invocation runs the same straight-line pipeline:
//!
//! 1. **Locator**: read bucket and key from the first notification record
//! 2. **Fetch**: download the object from S3
//! 3. **Parse**: decode the bytes as UTF-8 JSON
//! 4. **Index**: connect with fresh SigV4 credentials and submit one document

pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod processor;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Dependencies;
pub use errors::ProcessError;
pub use event::{ObjectLocator, ObjectNotification};
pub use processor::{EventProcessor, ProcessResponse};

use thiserror::Error;

/// Errors that can occur during start-up, before any event is handled.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search configuration error.
    #[error("Search error: {0}")]
    SearchError(#[from] document_indexer_repository::SearchIndexError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
