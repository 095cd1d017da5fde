use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{primitives::ByteStream, Client};
use std::path::Path;
use tokio::fs;

use crate::error::IngestError;

/// The one thing the uploader needs from an object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), IngestError>;
}

/// S3 through the default credential chain. Retries and auth are the SDK's business.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Region, credentials and endpoint come from the usual `AWS_*` sources.
    pub async fn from_env() -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(Client::new(&shared))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), IngestError> {
        // Read up front so every local failure surfaces before the request is built.
        let data = fs::read(local_path)
            .await
            .map_err(|source| IngestError::MissingSourceFile {
                path: local_path.to_path_buf(),
                source,
            })?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| IngestError::UploadRejected {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: e.into(),
            })?;

        Ok(())
    }
}
