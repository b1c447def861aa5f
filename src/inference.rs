use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use serde::Serialize;
use serde_json::Value;

use crate::error::ProcessorError;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-v2";

const PROMPT_PREFIX: &str = "Analyze the following data: ";
const MAX_TOKENS_TO_SAMPLE: u32 = 250;

/// Request body for the model invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceRequest {
    pub prompt: String,
    pub max_tokens_to_sample: u32,
}

/// Builds the invocation body for an input document: the fixed prompt
/// prefix followed by the document's compact JSON encoding.
pub fn build_request(document: &Value) -> InferenceRequest {
    InferenceRequest {
        prompt: format!("{PROMPT_PREFIX}{document}"),
        max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
    }
}

/// Synchronous (per-invocation) access to a hosted generative model.
#[async_trait]
pub trait InferenceClient {
    async fn invoke(&self, request: &InferenceRequest) -> Result<Value, ProcessorError>;
}

/// Bedrock-backed inference client for a single model id.
pub struct BedrockClient {
    client: BedrockRuntimeClient,
    model_id: String,
}

impl BedrockClient {
    pub fn new(client: BedrockRuntimeClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn invoke(&self, request: &InferenceRequest) -> Result<Value, ProcessorError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| ProcessorError::InferenceError(e.to_string()))?;
        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| ProcessorError::InferenceError(DisplayErrorContext(&e).to_string()))?;
        serde_json::from_slice(output.body().as_ref()).map_err(|e| {
            ProcessorError::InferenceError(format!("model returned invalid JSON: {e}"))
        })
    }
}
