mod aws;
mod batch;
mod config;
mod error;
mod uploader;

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::aws::S3Store;
use crate::config::Config;
use crate::uploader::BatchUploader;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Instant::now();

    // loads .env before anything reads the environment
    let config = Config::from_env().context("invalid ingest configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olist_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        bucket = %config.bucket,
        source_dir = %config.local_data_path.display(),
        tables = config.tables.len(),
        "staging raw {} batch",
        config.source_prefix
    );

    let store = S3Store::from_env().await;
    let summary = BatchUploader::new(&config, &store).run().await?;

    info!(
        "Uploaded {} files under batch {} in {:?}",
        summary.uploaded.len(),
        summary.batch_id,
        start_time.elapsed()
    );

    Ok(())
}
