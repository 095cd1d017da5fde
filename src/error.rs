use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single file's upload step. The first one ends the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("source file {} could not be read", path.display())]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("upload to s3://{bucket}/{key} was rejected")]
    UploadRejected {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table entry {0:?} has no file extension")]
    InvalidTable(String),
}
