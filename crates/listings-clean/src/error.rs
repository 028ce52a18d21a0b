use std::path::PathBuf;

use listings_artifact::ArtifactError;
use listings_ingest::IngestError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;
