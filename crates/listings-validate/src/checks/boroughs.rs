use std::collections::BTreeSet;

use listings_model::{Borough, ListingColumn};
use polars::prelude::DataFrame;

use super::strings;
use crate::issue::{CheckKind, Issue};

const NULL_LABEL: &str = "<null>";

/// Distinct `neighbourhood_group` values must equal the borough set exactly.
///
/// Nulls count as an unexpected value.
pub fn check_boroughs(df: &DataFrame) -> Option<Issue> {
    let groups = match strings(df, CheckKind::BoroughSet, ListingColumn::NeighbourhoodGroup) {
        Ok(groups) => groups,
        Err(issue) => return Some(issue),
    };

    let observed: BTreeSet<&str> = groups
        .into_iter()
        .map(|value| value.unwrap_or(NULL_LABEL))
        .collect();
    let expected: BTreeSet<&str> = Borough::labels().into_iter().collect();
    if observed == expected {
        return None;
    }

    Some(Issue::BoroughMismatch {
        missing: expected
            .difference(&observed)
            .map(ToString::to_string)
            .collect(),
        unexpected: observed
            .difference(&expected)
            .map(ToString::to_string)
            .collect(),
    })
}
