use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, tracing, Error};

mod error;
mod event;
mod event_handler;
mod inference;
mod store;

use inference::{BedrockClient, DEFAULT_MODEL_ID};
use store::S3Store;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let store = S3Store::new(S3Client::new(&shared_config));
    let model_id = std::env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
    let inference = BedrockClient::new(BedrockRuntimeClient::new(&shared_config), model_id);
    run(service_fn(|event| async {
        event_handler::handle(event, &store, &inference)
            .await
            .map_err(Error::from)
    }))
    .await
}
