//! # Document Indexer Repository
//!
//! This crate provides traits and implementations for the two collaborators
//! the document indexer talks to: object storage and the search engine. It
//! includes definitions for errors, interfaces, static search configuration,
//! and concrete implementations for Amazon S3 and OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod s3;
pub mod types;

pub use config::SearchConfig;
pub use errors::{SearchIndexError, StorageError};
pub use interfaces::{ObjectStore, SearchConnector, SearchIndexProvider};
pub use crate::opensearch::{OpenSearchClient, OpenSearchConnector};
pub use s3::S3ObjectStore;
pub use types::{IndexAcknowledgement, StoredObject};
