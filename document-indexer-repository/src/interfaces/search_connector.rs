//! Search connector trait definition.

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;

/// Opens authenticated connections to the search engine.
///
/// Each call obtains current credentials and returns a provider that signs
/// its requests with them. Callers open one connection per invocation and
/// drop it afterwards; nothing obtained here is meant to outlive that.
#[async_trait]
pub trait SearchConnector: Send + Sync {
    /// Open a connection to the search engine.
    ///
    /// # Returns
    ///
    /// * `Ok(Box<dyn SearchIndexProvider>)` - A provider ready to submit documents
    /// * `Err(SearchIndexError::AuthError)` - If credentials cannot be obtained
    /// * `Err(SearchIndexError::ConnectionError)` - If the signed transport cannot be built
    async fn connect(&self) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError>;
}
