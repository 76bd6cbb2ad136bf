//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{IndexParts, OpenSearch};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::config::DOCUMENT_TYPE;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::IndexAcknowledgement;

/// OpenSearch client implementation.
///
/// Wraps a transport that has already been configured with signing
/// credentials. Instances are produced by [`OpenSearchConnector`] and live
/// for a single invocation.
///
/// [`OpenSearchConnector`]: crate::opensearch::OpenSearchConnector
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Wrap an already configured OpenSearch client.
    pub fn new(client: OpenSearch) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    /// Index a document with an engine-assigned ID.
    ///
    /// Posts the body to `/{index}/_doc`.
    #[instrument(skip(self, document), fields(doc_type = DOCUMENT_TYPE))]
    async fn index_document(
        &self,
        index: &str,
        document: &Value,
    ) -> Result<IndexAcknowledgement, SearchIndexError> {
        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchIndexError::rejected(status.as_u16(), error_body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::index(format!("Unreadable index response: {}", e)))?;

        let ack = IndexAcknowledgement::from_response_body(&body);
        debug!(
            doc_id = ?ack.id,
            result = ?ack.result,
            "Document indexed"
        );
        Ok(ack)
    }
}
