use document_indexer::handler::function_handler;
use document_indexer::Dependencies;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let dependencies = Dependencies::new().await?;
    let processor = &dependencies.processor;

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(event, processor)
    }))
    .await
}
