use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::error::ProcessorError;
use crate::event::StorageEvent;
use crate::inference::{build_request, InferenceClient};
use crate::store::ObjectStore;

/// Success response returned to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn ok() -> Self {
        Self {
            status_code: 200,
            body: "Processing complete!".to_string(),
        }
    }
}

/// Derives the output key: `processed/` plus the final path segment of the
/// input key (the whole key when it has no `/`).
pub fn output_key(input_key: &str) -> String {
    let basename = match input_key.rfind('/') {
        Some(idx) => &input_key[idx + 1..],
        None => input_key,
    };
    format!("processed/{basename}")
}

/// Invocation entry point: wraps the pipeline in a per-invocation span and
/// logs every failure before handing it back to the runtime. The span is
/// closed on all exit paths.
pub async fn handle<S, I>(
    event: LambdaEvent<S3Event>,
    store: &S,
    inference: &I,
) -> Result<HandlerResponse, ProcessorError>
where
    S: ObjectStore,
    I: InferenceClient,
{
    let span = info_span!("invocation", request_id = %event.context.request_id);
    async move {
        function_handler(event, store, inference)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "error processing data"))
    }
    .instrument(span)
    .await
}

/// The pipeline itself: decode, fetch, infer, persist. Strictly sequential;
/// the first failing step short-circuits the rest.
pub(crate) async fn function_handler<S, I>(
    event: LambdaEvent<S3Event>,
    store: &S,
    inference: &I,
) -> Result<HandlerResponse, ProcessorError>
where
    S: ObjectStore,
    I: InferenceClient,
{
    let storage_event = StorageEvent::from_s3_event(&event.payload)?;
    tracing::info!(
        bucket = %storage_event.bucket,
        key = %storage_event.key,
        "processing object"
    );

    let raw = store.read(&storage_event.bucket, &storage_event.key).await?;
    let document: Value = serde_json::from_slice(&raw)?;

    let results = inference.invoke(&build_request(&document)).await?;

    let out_key = output_key(&storage_event.key);
    store
        .write(
            &storage_event.bucket,
            &out_key,
            results.to_string().into_bytes(),
        )
        .await?;
    tracing::info!(key = %out_key, "stored inference results");

    Ok(HandlerResponse::ok())
}
