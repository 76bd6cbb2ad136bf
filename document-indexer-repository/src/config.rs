//! Configuration types for the search connection.

use url::Url;

use crate::errors::SearchIndexError;

/// AWS region the search domain lives in.
pub const DEFAULT_REGION: &str = "ap-south-1";

/// Service identifier used when signing requests to the search domain.
pub const DEFAULT_SERVICE: &str = "es";

/// Search domain endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://vpc-ttpportal-lrysnolxf3dtvnwgchv3xln2py.ap-south-1.es.amazonaws.com";

/// Index every document is submitted to.
pub const DEFAULT_INDEX_NAME: &str = "my-index";

/// Document type label. OpenSearch 2.x only knows `_doc`, which is the
/// endpoint single-document index requests are posted to.
pub const DOCUMENT_TYPE: &str = "_doc";

/// Static configuration for the search connection.
///
/// Built once at process start and shared read-only by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Domain endpoint, always `https` on port 443.
    pub endpoint: String,
    /// Region used to sign requests.
    pub region: String,
    /// Service identifier used to sign requests.
    pub service: String,
    /// Target index name.
    pub index_name: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl SearchConfig {
    /// Create a config for the given endpoint, keeping the other defaults.
    ///
    /// A bare host name is accepted and gets the `https` scheme. Any other
    /// scheme or an explicit port other than 443 is rejected, since the domain
    /// is only reachable over TLS on the standard port.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, SearchIndexError> {
        self.endpoint = parse_endpoint(endpoint)?.to_string();
        Ok(self)
    }

    /// Parse the endpoint into the URL the transport connects to.
    pub fn endpoint_url(&self) -> Result<Url, SearchIndexError> {
        parse_endpoint(&self.endpoint)
    }

    /// Set the signing region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the signing service identifier.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Set the target index name.
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, SearchIndexError> {
    let endpoint = endpoint.trim();
    let candidate = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| SearchIndexError::connection(format!("Invalid endpoint {}: {}", endpoint, e)))?;

    if url.scheme() != "https" {
        return Err(SearchIndexError::connection(format!(
            "Endpoint must use https: {}",
            endpoint
        )));
    }
    if url.port_or_known_default() != Some(443) {
        return Err(SearchIndexError::connection(format!(
            "Endpoint must use port 443: {}",
            endpoint
        )));
    }

    Ok(url)
}
