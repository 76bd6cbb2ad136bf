//! Event processor implementation.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::errors::ProcessError;
use crate::event::ObjectNotification;
use document_indexer_repository::{ObjectStore, SearchConnector};

/// Body returned for a successfully indexed object.
pub const SUCCESS_MESSAGE: &str = "File processed successfully";

/// Result handed back to the Lambda runtime on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ProcessResponse {
    /// The 200 response with the confirmation message.
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Processor that indexes the object named by a notification.
///
/// The processor is responsible for:
/// - Extracting the object locator from the first notification record
/// - Fetching and parsing the object as JSON
/// - Opening a freshly authenticated search connection and submitting the document
///
/// Steps run strictly in order and the first failure aborts the rest. Nothing
/// is deduplicated: the same notification delivered twice is indexed twice.
pub struct EventProcessor {
    store: Arc<dyn ObjectStore>,
    connector: Arc<dyn SearchConnector>,
    index_name: String,
}

impl EventProcessor {
    /// Create a new event processor.
    ///
    /// # Arguments
    ///
    /// * `store` - Storage the objects are fetched from
    /// * `connector` - Opens a signed search connection per invocation
    /// * `index_name` - Index every document is submitted to
    pub fn new(
        store: Arc<dyn ObjectStore>,
        connector: Arc<dyn SearchConnector>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            connector,
            index_name: index_name.into(),
        }
    }

    /// Process one notification end to end.
    ///
    /// Any failure is logged here, once, and returned unchanged.
    #[instrument(skip(self, event), fields(index = %self.index_name))]
    pub async fn process(&self, event: &Value) -> Result<ProcessResponse, ProcessError> {
        match self.run(event).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(error = %e, "Failed to process event");
                Err(e)
            }
        }
    }

    async fn run(&self, event: &Value) -> Result<ProcessResponse, ProcessError> {
        let notification = ObjectNotification::from_event(event)?;
        let locator = &notification.locator;
        info!(
            bucket = %locator.bucket,
            key = %locator.key,
            event_name = ?notification.event_name,
            size = ?notification.size,
            "Processing object"
        );

        let object = self
            .store
            .get_object(&locator.bucket, &locator.key)
            .await?;
        debug!(
            size = object.bytes.len(),
            content_type = ?object.content_type,
            "Fetched object"
        );

        let document = parse_document(object.bytes)?;

        let search = self.connector.connect().await.map_err(ProcessError::Auth)?;
        let ack = search
            .index_document(&self.index_name, &document)
            .await
            .map_err(ProcessError::Index)?;

        info!(
            bucket = %locator.bucket,
            key = %locator.key,
            doc_id = ?ack.id,
            result = ?ack.result,
            "Indexed object"
        );

        Ok(ProcessResponse::success())
    }
}

/// Decode the object content as UTF-8 and parse it as JSON.
fn parse_document(bytes: Vec<u8>) -> Result<Value, ProcessError> {
    let text = String::from_utf8(bytes)?;
    serde_json::from_str(&text).map_err(ProcessError::Parse)
}
