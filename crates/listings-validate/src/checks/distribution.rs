use listings_model::ListingColumn;
use polars::prelude::DataFrame;

use super::ensure_present;
use crate::distribution::{KlConvention, kl_divergence, neighbourhood_group_distribution};
use crate::issue::{CheckKind, Issue};

/// Divergence (bits) of the candidate's borough distribution from the reference's.
pub fn distribution_drift(
    candidate: &DataFrame,
    reference: &DataFrame,
    convention: KlConvention,
) -> Result<f64, Issue> {
    let column = ListingColumn::NeighbourhoodGroup;
    let mut distributions = Vec::with_capacity(2);
    for df in [candidate, reference] {
        ensure_present(df, CheckKind::Distribution, column)?;
        let distribution =
            neighbourhood_group_distribution(df).map_err(|err| Issue::UnreadableColumn {
                check: CheckKind::Distribution,
                column: column.name().to_string(),
                reason: err.to_string(),
            })?;
        distributions.push(distribution);
    }
    Ok(kl_divergence(&distributions[0], &distributions[1], convention))
}

/// Fails when `divergence >= threshold`; an undefined divergence fails too.
pub fn drift_issue(divergence: f64, threshold: f64) -> Option<Issue> {
    (divergence.is_nan() || divergence >= threshold).then_some(Issue::DistributionDrift {
        divergence,
        threshold,
    })
}

pub fn check_distribution(
    candidate: &DataFrame,
    reference: &DataFrame,
    threshold: f64,
    convention: KlConvention,
) -> Option<Issue> {
    match distribution_drift(candidate, reference, convention) {
        Ok(divergence) => drift_issue(divergence, threshold),
        Err(issue) => Some(issue),
    }
}
