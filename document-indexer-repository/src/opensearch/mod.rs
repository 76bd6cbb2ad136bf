//! OpenSearch implementation of the search collaborator.
//!
//! This module provides a connector that signs requests with AWS SigV4 and a
//! concrete implementation of `SearchIndexProvider` using OpenSearch as the
//! backend.

mod client;
mod connector;

pub use client::OpenSearchClient;
pub use connector::OpenSearchConnector;
