//! End-to-end cleaning run: resolve, clean, write, publish.

use std::path::{Path, PathBuf};

use listings_artifact::{ArtifactHandle, ArtifactStore, PublishRequest};
use listings_ingest::read_listings_csv;
use listings_model::PriceRange;
use tracing::{info, info_span};

use crate::error::Result;
use crate::filters::{CleanStats, clean_listings};
use crate::writer::write_listings_csv;

/// File name of the cleaned dataset.
pub const OUTPUT_FILE_NAME: &str = "clean_sample.csv";

#[derive(Debug, Clone)]
pub struct CleanRequest {
    /// Reference to the raw dataset, e.g. `sample.csv:latest`.
    pub input_artifact: String,
    pub output_artifact: String,
    pub output_type: String,
    pub output_description: String,
    pub price: PriceRange,
}

#[derive(Debug, Clone)]
pub struct CleanSummary {
    pub input: ArtifactHandle,
    pub output: ArtifactHandle,
    pub output_path: PathBuf,
    pub stats: CleanStats,
}

/// Run the cleaning stage once.
///
/// Errors from the store, the reader or the writer are returned as-is;
/// nothing is retried.
pub fn run_cleaning(
    store: &dyn ArtifactStore,
    request: &CleanRequest,
    work_dir: &Path,
) -> Result<CleanSummary> {
    let span = info_span!("clean", input = %request.input_artifact);
    let _guard = span.enter();

    let input = store.resolve(&request.input_artifact)?;
    let raw = read_listings_csv(input.path())?;
    let cleaned = clean_listings(&raw, request.price)?;

    let output_path = work_dir.join(OUTPUT_FILE_NAME);
    write_listings_csv(&cleaned.frame, &output_path)?;
    info!(
        file = %output_path.display(),
        rows = cleaned.stats.after_location_filter,
        "Saved cleaned data"
    );

    let output = store.publish(&PublishRequest::new(
        request.output_artifact.clone(),
        request.output_type.clone(),
        request.output_description.clone(),
        &output_path,
    ))?;

    Ok(CleanSummary {
        input,
        output,
        output_path,
        stats: cleaned.stats,
    })
}
