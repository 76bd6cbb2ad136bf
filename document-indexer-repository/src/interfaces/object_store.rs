//! Object store trait definition.

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::types::StoredObject;

/// Abstracts the object storage service objects are fetched from.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full content of an object.
    ///
    /// # Arguments
    ///
    /// * `bucket` - The bucket holding the object
    /// * `key` - The object key, already URL-decoded
    ///
    /// # Returns
    ///
    /// * `Ok(StoredObject)` - The object's bytes and reported content type
    /// * `Err(StorageError)` - If the object is missing, access is denied, or the transfer fails
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError>;
}
