use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::checks::{
    check_boroughs, check_columns, check_geo_bounds, check_price_range, check_row_count,
    distribution_drift, drift_issue,
};
use crate::issue::CheckKind;
use crate::params::ValidationParams;
use crate::report::{CheckOutcome, CheckStatus, ValidationReport};

/// Run all six checks against `candidate`.
///
/// A failing check never stops the others. The distribution check is
/// skipped when `reference` is `None`.
pub fn validate_listings(
    candidate: &DataFrame,
    reference: Option<&DataFrame>,
    params: &ValidationParams,
) -> ValidationReport {
    let mut divergence = None;
    let outcomes: Vec<CheckOutcome> = CheckKind::ALL
        .into_iter()
        .map(|check| match check {
            CheckKind::ColumnOrder => CheckOutcome::from_issue(check, check_columns(candidate)),
            CheckKind::BoroughSet => CheckOutcome::from_issue(check, check_boroughs(candidate)),
            CheckKind::GeoBounds => {
                CheckOutcome::from_issue(check, check_geo_bounds(candidate, &params.bounds))
            }
            CheckKind::Distribution => match reference {
                None => CheckOutcome::skipped(check),
                Some(reference) => {
                    match distribution_drift(candidate, reference, params.kl_convention) {
                        Ok(value) => {
                            divergence = Some(value);
                            CheckOutcome::from_issue(check, drift_issue(value, params.kl_threshold))
                        }
                        Err(issue) => CheckOutcome::from_issue(check, Some(issue)),
                    }
                }
            },
            CheckKind::RowCount => {
                CheckOutcome::from_issue(check, check_row_count(candidate, params.rows))
            }
            CheckKind::PriceRange => {
                CheckOutcome::from_issue(check, check_price_range(candidate, params.price))
            }
        })
        .inspect(log_outcome)
        .collect();

    ValidationReport {
        rows: candidate.height(),
        params: *params,
        divergence,
        outcomes,
    }
}

fn log_outcome(outcome: &CheckOutcome) {
    debug!(
        check = outcome.check.label(),
        rule_id = outcome.check.rule_id(),
        status = outcome.status.label(),
        "check finished"
    );
    if outcome.status == CheckStatus::Failed {
        warn!(
            check = outcome.check.label(),
            rule_id = outcome.check.rule_id(),
            "{}",
            outcome.message()
        );
    }
}
