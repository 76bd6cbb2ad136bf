//! Mock collaborators shared by the unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use document_indexer_repository::{
    IndexAcknowledgement, ObjectStore, SearchConnector, SearchIndexError, SearchIndexProvider,
    StorageError, StoredObject,
};

/// Build a single-record S3 notification.
pub fn notification(bucket: &str, key: &str) -> Value {
    json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "bucket": { "name": bucket },
                "object": { "key": key, "size": 28 }
            }
        }]
    })
}

/// Object store serving canned objects and recording every request.
#[derive(Clone, Default)]
pub struct MockObjectStore {
    objects: Arc<HashMap<(String, String), Result<StoredObject, StorageError>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, bucket: &str, key: &str, bytes: impl AsRef<[u8]>) -> Self {
        let object = StoredObject::new(bytes.as_ref().to_vec()).with_content_type("application/json");
        self.with_entry(bucket, key, Ok(object))
    }

    pub fn with_failure(self, bucket: &str, key: &str, error: StorageError) -> Self {
        self.with_entry(bucket, key, Err(error))
    }

    fn with_entry(
        self,
        bucket: &str,
        key: &str,
        entry: Result<StoredObject, StorageError>,
    ) -> Self {
        let mut objects = (*self.objects).clone();
        objects.insert((bucket.to_string(), key.to_string()), entry);
        Self {
            objects: Arc::new(objects),
            requests: self.requests,
        }
    }

    pub async fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError> {
        self.requests
            .lock()
            .await
            .push((bucket.to_string(), key.to_string()));

        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(StorageError::not_found(bucket, key)))
    }
}

/// Connector counting connections and recording every submitted document.
#[derive(Clone, Default)]
pub struct MockConnector {
    connect_error: Option<SearchIndexError>,
    index_error: Option<SearchIndexError>,
    connections: Arc<Mutex<usize>>,
    indexed: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_connect(mut self, error: SearchIndexError) -> Self {
        self.connect_error = Some(error);
        self
    }

    pub fn failing_index(mut self, error: SearchIndexError) -> Self {
        self.index_error = Some(error);
        self
    }

    pub async fn connections(&self) -> usize {
        *self.connections.lock().await
    }

    pub async fn indexed(&self) -> Vec<(String, Value)> {
        self.indexed.lock().await.clone()
    }
}

#[async_trait]
impl SearchConnector for MockConnector {
    async fn connect(&self) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError> {
        *self.connections.lock().await += 1;

        if let Some(error) = &self.connect_error {
            return Err(error.clone());
        }

        Ok(Box::new(MockIndex {
            error: self.index_error.clone(),
            indexed: self.indexed.clone(),
        }))
    }
}

struct MockIndex {
    error: Option<SearchIndexError>,
    indexed: Arc<Mutex<Vec<(String, Value)>>>,
}

#[async_trait]
impl SearchIndexProvider for MockIndex {
    async fn index_document(
        &self,
        index: &str,
        document: &Value,
    ) -> Result<IndexAcknowledgement, SearchIndexError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let mut indexed = self.indexed.lock().await;
        indexed.push((index.to_string(), document.clone()));

        Ok(IndexAcknowledgement {
            id: Some(format!("doc-{}", indexed.len())),
            result: Some("created".to_string()),
        })
    }
}
