//! Amazon S3 implementation of the object store.

mod object_store;

pub use object_store::S3ObjectStore;
