use tracing::{debug, info};

use crate::aws::ObjectStore;
use crate::batch::{destination_key, local_path, BatchId};
use crate::config::Config;
use crate::error::IngestError;

/// What a successful run staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub batch_id: BatchId,
    /// Destination keys, in upload order.
    pub uploaded: Vec<String>,
}

/// Copies every configured table into one batch prefix, one file at a time.
pub struct BatchUploader<'a, S: ObjectStore> {
    config: &'a Config,
    store: &'a S,
}

impl<'a, S: ObjectStore> BatchUploader<'a, S> {
    pub fn new(config: &'a Config, store: &'a S) -> Self {
        Self { config, store }
    }

    pub async fn run(&self) -> Result<RunSummary, IngestError> {
        self.run_with_batch(BatchId::now()).await
    }

    /// Stops at the first failed file; later files are never attempted.
    pub async fn run_with_batch(&self, batch_id: BatchId) -> Result<RunSummary, IngestError> {
        let config = self.config;
        debug!(batch_id = %batch_id, files = config.tables.len(), "starting batch");

        let mut uploaded = Vec::with_capacity(config.tables.len());
        for file in &config.tables {
            let path = local_path(&config.local_data_path, file);
            let key = destination_key(&config.raw_zone, &config.source_prefix, file, &batch_id);

            info!(
                "Uploading {} to s3://{}/{}...",
                file.file_name(),
                config.bucket,
                key
            );
            self.store.upload(&path, &config.bucket, &key).await?;
            uploaded.push(key);
        }

        Ok(RunSummary { batch_id, uploaded })
    }
}
