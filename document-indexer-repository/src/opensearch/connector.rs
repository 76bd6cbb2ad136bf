//! Signed connections to an Amazon OpenSearch Service domain.

use async_trait::async_trait;
use aws_config::Region;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    OpenSearch,
};
use tracing::{debug, info, instrument};

use crate::config::SearchConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::{SearchConnector, SearchIndexProvider};
use crate::opensearch::OpenSearchClient;

/// Builds an [`OpenSearchClient`] per connection, signing with SigV4.
///
/// Credentials are resolved from the provider on every [`connect`] call and
/// pinned into that connection only. The default AWS provider chain caches
/// and refreshes them ahead of expiry, so each connection signs with current
/// material.
///
/// # Example
///
/// ```ignore
/// let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
/// let provider = sdk_config.credentials_provider().unwrap();
/// let connector = OpenSearchConnector::new(SearchConfig::default(), provider);
///
/// let client = connector.connect().await?;
/// client.index_document("my-index", &json!({"orderId": 42})).await?;
/// ```
///
/// [`connect`]: SearchConnector::connect
pub struct OpenSearchConnector {
    config: SearchConfig,
    credentials_provider: SharedCredentialsProvider,
}

impl OpenSearchConnector {
    /// Create a connector for the configured domain.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, region and service identifier of the domain
    /// * `credentials_provider` - Source of signing credentials
    pub fn new(config: SearchConfig, credentials_provider: SharedCredentialsProvider) -> Self {
        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            service = %config.service,
            "Created OpenSearch connector"
        );

        Self {
            config,
            credentials_provider,
        }
    }
}

#[async_trait]
impl SearchConnector for OpenSearchConnector {
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn connect(&self) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError> {
        let credentials = self
            .credentials_provider
            .provide_credentials()
            .await
            .map_err(|e| SearchIndexError::auth(e.to_string()))?;

        debug!(expiry = ?credentials.expiry(), "Resolved signing credentials");

        let url = self.config.endpoint_url()?;
        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::AwsSigV4(
                SharedCredentialsProvider::new(credentials),
                Region::new(self.config.region.clone()),
            ))
            .service_name(&self.config.service)
            .cert_validation(CertificateValidation::Default)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        Ok(Box::new(OpenSearchClient::new(OpenSearch::new(transport))))
    }
}
