use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use crate::error::ProcessorError;

/// Read/write access to named objects in a bucket. One attempt per call;
/// retries belong to the SDK's retry config or the invoking platform.
#[async_trait]
pub trait ObjectStore {
    async fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ProcessorError>;
    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ProcessorError>;
}

/// S3-backed object store.
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ProcessorError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ProcessorError::FetchError(DisplayErrorContext(&e).to_string()))?;
        let data = response
            .body
            .collect()
            .await
            .map_err(|e| ProcessorError::FetchError(DisplayErrorContext(&e).to_string()))?;
        Ok(data.into_bytes().to_vec())
    }

    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ProcessorError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| ProcessorError::PersistError(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
