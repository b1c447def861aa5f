use thiserror::Error;

/// Terminal failure kinds for a single invocation.
///
/// None of these are retried here; every one is logged and handed back to
/// the Lambda runtime, which owns the retry/DLQ policy.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The trigger payload did not carry a usable S3 record.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// The fetched object was not valid JSON.
    #[error("input object is not valid JSON: {0}")]
    InvalidInputFormat(#[from] serde_json::Error),

    /// Reading the input object from S3 failed.
    #[error("failed to fetch input object: {0}")]
    FetchError(String),

    /// The model invocation failed or returned an unusable body.
    #[error("inference failed: {0}")]
    InferenceError(String),

    /// Writing the result object back to S3 failed.
    #[error("failed to persist result object: {0}")]
    PersistError(String),
}
