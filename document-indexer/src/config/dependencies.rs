//! Dependency initialization and wiring for the document indexer.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing::info;

use crate::config::search_config_from_env;
use crate::processor::EventProcessor;
use crate::IndexingError;
use document_indexer_repository::{OpenSearchConnector, S3ObjectStore};

/// Container for all initialized dependencies.
///
/// Built once per process. Only immutable configuration and the pooled S3
/// client are shared between invocations; search connections are opened per
/// invocation by the processor.
pub struct Dependencies {
    /// The configured processor ready to handle events.
    pub processor: EventProcessor,
}

impl Dependencies {
    /// Initialize all dependencies from the environment.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new() -> Result<Self, IndexingError> {
        let search_config = search_config_from_env()?;

        info!(
            endpoint = %search_config.endpoint,
            region = %search_config.region,
            service = %search_config.service,
            index = %search_config.index_name,
            "Initializing dependencies"
        );

        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let credentials_provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| IndexingError::config("No AWS credentials provider configured"))?;

        let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config));
        let index_name = search_config.index_name.clone();
        let connector = OpenSearchConnector::new(search_config, credentials_provider);

        let processor = EventProcessor::new(Arc::new(store), Arc::new(connector), index_name);

        Ok(Self { processor })
    }
}
