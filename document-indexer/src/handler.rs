//! AWS Lambda handler for the document indexer.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::processor::{EventProcessor, ProcessResponse};

/// Lambda handler function.
///
/// Hands the notification to the processor. A processing failure is returned
/// as the invocation error so the runtime reports the invocation as failed.
pub async fn function_handler(
    event: LambdaEvent<Value>,
    processor: &EventProcessor,
) -> Result<ProcessResponse, LambdaError> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    let response = processor.process(&payload).instrument(span).await?;
    Ok(response)
}
