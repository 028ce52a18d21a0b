//! Stage wiring shared by the `validate` command and its tests.

use std::path::PathBuf;

use anyhow::{Context, Result};
use listings_artifact::{ArtifactHandle, ArtifactStore};
use listings_ingest::read_listings_csv;
use listings_validate::{ValidationParams, ValidationReport, validate_listings};
use polars::prelude::DataFrame;
use tracing::info_span;

/// Result of a `validate` run, for the summary printer.
pub struct ValidationRun {
    pub candidate: ArtifactHandle,
    pub reference: Option<ArtifactHandle>,
    pub report: ValidationReport,
    pub report_json: Option<PathBuf>,
}

impl ValidationRun {
    /// Process exit code: 1 when any check failed.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.report.has_failures())
    }
}

/// Resolve a dataset reference and load it.
pub fn load_dataset(
    store: &dyn ArtifactStore,
    reference: &str,
) -> Result<(ArtifactHandle, DataFrame)> {
    let handle = store
        .resolve(reference)
        .with_context(|| format!("resolve {reference}"))?;
    let df = read_listings_csv(handle.path())
        .with_context(|| format!("read {}", handle.path().display()))?;
    Ok((handle, df))
}

/// Validate `candidate` (against `reference` when given) and optionally
/// write the JSON report.
pub fn run_validation(
    store: &dyn ArtifactStore,
    candidate: &str,
    reference: Option<&str>,
    params: &ValidationParams,
    report_json: Option<PathBuf>,
) -> Result<ValidationRun> {
    let span = info_span!("validate", csv = %candidate);
    let _guard = span.enter();

    let (candidate, candidate_df) = load_dataset(store, candidate)?;
    let reference = reference
        .map(|reference| load_dataset(store, reference))
        .transpose()?;

    let report = validate_listings(
        &candidate_df,
        reference.as_ref().map(|(_, df)| df),
        params,
    );
    if let Some(path) = &report_json {
        report
            .write_json(path)
            .with_context(|| format!("write report {}", path.display()))?;
    }

    Ok(ValidationRun {
        candidate,
        reference: reference.map(|(handle, _)| handle),
        report,
        report_json,
    })
}
