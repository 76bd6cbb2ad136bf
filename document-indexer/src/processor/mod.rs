//! Event processor for the document indexer.
//!
//! Turns one S3 notification into one search-index write.

mod event_processor;

pub use event_processor::{EventProcessor, ProcessResponse, SUCCESS_MESSAGE};
