//! Configuration and dependency wiring for the document indexer.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{
    search_config_from_env, search_config_from_lookup, ENV_AWS_REGION, ENV_INDEX_NAME,
    ENV_SEARCH_ENDPOINT, ENV_SEARCH_SERVICE,
};
