//! Search index provider trait definition.
//!
//! This module defines the abstract interface for submitting documents,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::IndexAcknowledgement;

/// Abstracts the underlying search index implementation.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Index a single document as a new entry in the given index.
    ///
    /// The engine assigns the document identifier, so submitting the same body
    /// twice creates two entries.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index name
    /// * `document` - The document body, any JSON value
    ///
    /// # Returns
    ///
    /// * `Ok(IndexAcknowledgement)` - If the engine accepted the document
    /// * `Err(SearchIndexError)` - If the request failed or was rejected
    async fn index_document(
        &self,
        index: &str,
        document: &Value,
    ) -> Result<IndexAcknowledgement, SearchIndexError>;
}
