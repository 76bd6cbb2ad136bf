//! S3 object store implementation.

use async_trait::async_trait;
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::get_object::GetObjectError,
    Client,
};
use tracing::{debug, instrument};

use crate::errors::StorageError;
use crate::interfaces::ObjectStore;
use crate::types::StoredObject;

/// Fetches objects with the AWS SDK S3 client.
///
/// The SDK client is pooled internally and safe to share between invocations.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Create from an existing AWS SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self))]
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify_get_object_error(e, bucket, key))?;

        let content_type = response.content_type().map(str::to_string);

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::transfer(e.to_string()))?
            .into_bytes();

        debug!(
            size = bytes.len(),
            content_type = ?content_type,
            "Fetched object"
        );

        Ok(StoredObject {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

fn classify_get_object_error<R>(
    err: SdkError<GetObjectError, R>,
    bucket: &str,
    key: &str,
) -> StorageError
where
    R: std::fmt::Debug + 'static,
{
    let err = match err {
        SdkError::ServiceError(service_err) => service_err.into_err(),
        other => return StorageError::transfer(DisplayErrorContext(&other).to_string()),
    };

    if err.is_no_such_key() {
        return StorageError::not_found(bucket, key);
    }

    match err.code() {
        Some("NotFound") => StorageError::not_found(bucket, key),
        Some("AccessDenied") => StorageError::access_denied(bucket, key),
        _ => StorageError::transfer(DisplayErrorContext(&err).to_string()),
    }
}
