use aws_lambda_events::event::s3::S3Event;

use crate::error::ProcessorError;

/// The (bucket, key) pair extracted from an S3 event notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub bucket: String,
    pub key: String,
}

impl StorageEvent {
    /// Decodes the first record of the notification. Additional records are
    /// ignored; S3 delivers one record per object event in practice, and
    /// this handler processes a single object per invocation.
    pub fn from_s3_event(event: &S3Event) -> Result<Self, ProcessorError> {
        let record = event
            .records
            .first()
            .ok_or_else(|| ProcessorError::MalformedEvent("no records in event".to_string()))?;
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or_else(|| ProcessorError::MalformedEvent("record has no bucket name".to_string()))?;
        let key = record
            .s3
            .object
            .key
            .clone()
            .ok_or_else(|| ProcessorError::MalformedEvent("record has no object key".to_string()))?;
        Ok(Self { bucket, key })
    }
}
