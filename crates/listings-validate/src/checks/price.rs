use listings_model::{ListingColumn, PriceRange};
use polars::prelude::DataFrame;

use super::{MAX_SAMPLES, display_value, floats};
use crate::issue::{CheckKind, Issue};

/// Every price must lie inside `range`; a null price violates.
pub fn check_price_range(df: &DataFrame, range: PriceRange) -> Option<Issue> {
    let prices = match floats(df, CheckKind::PriceRange, ListingColumn::Price) {
        Ok(prices) => prices,
        Err(issue) => return Some(issue),
    };

    let mut violating = 0u64;
    let mut samples = Vec::new();
    for (row, price) in prices.into_iter().enumerate() {
        if price.is_some_and(|p| range.contains(p)) {
            continue;
        }
        violating += 1;
        if samples.len() < MAX_SAMPLES {
            samples.push(format!("row {row}: {}", display_value(price)));
        }
    }

    (violating > 0).then(|| Issue::PriceOutOfRange {
        range,
        violating,
        samples,
    })
}
