//! Static search settings.
//!
//! The fixed deployment values live in `document_indexer_repository::config`.
//! Each can be overridden through the environment, read once at start-up.

use std::env;

use document_indexer_repository::SearchConfig;

use crate::IndexingError;

/// Region used to sign search requests.
pub const ENV_AWS_REGION: &str = "INDEXER_AWS_REGION";

/// Service identifier used to sign search requests.
pub const ENV_SEARCH_SERVICE: &str = "INDEXER_SEARCH_SERVICE";

/// Search domain endpoint.
pub const ENV_SEARCH_ENDPOINT: &str = "INDEXER_SEARCH_ENDPOINT";

/// Target index name.
pub const ENV_INDEX_NAME: &str = "INDEXER_INDEX_NAME";

/// Build the search configuration from the process environment.
///
/// # Environment Variables
///
/// - `INDEXER_AWS_REGION`: signing region (default: ap-south-1)
/// - `INDEXER_SEARCH_SERVICE`: signing service (default: es)
/// - `INDEXER_SEARCH_ENDPOINT`: domain endpoint, https on port 443
/// - `INDEXER_INDEX_NAME`: target index (default: my-index)
pub fn search_config_from_env() -> Result<SearchConfig, IndexingError> {
    search_config_from_lookup(|name| env::var(name).ok())
}

/// Build the search configuration from an arbitrary variable lookup.
///
/// Blank values count as unset.
pub fn search_config_from_lookup<F>(lookup: F) -> Result<SearchConfig, IndexingError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let mut config = SearchConfig::default();

    if let Some(region) = var(ENV_AWS_REGION) {
        config = config.with_region(region.trim());
    }
    if let Some(service) = var(ENV_SEARCH_SERVICE) {
        config = config.with_service(service.trim());
    }
    if let Some(endpoint) = var(ENV_SEARCH_ENDPOINT) {
        config = config.with_endpoint(&endpoint)?;
    }
    if let Some(index_name) = var(ENV_INDEX_NAME) {
        config = config.with_index_name(index_name.trim());
    }

    Ok(config)
}
