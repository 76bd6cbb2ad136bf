//! Interface definitions for the storage and search collaborators.
//!
//! These traits allow for dependency injection and swappable backends, so the
//! event processor can be exercised against mock implementations.

mod object_store;
mod search_connector;
mod search_index_provider;

pub use object_store::ObjectStore;
pub use search_connector::SearchConnector;
pub use search_index_provider::SearchIndexProvider;
