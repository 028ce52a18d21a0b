use listings_model::{GeoBounds, ListingColumn};
use polars::prelude::DataFrame;

use super::{MAX_SAMPLES, display_value, floats};
use crate::issue::{CheckKind, Issue};

/// Every row must lie inside `bounds`; rows missing a coordinate violate.
pub fn check_geo_bounds(df: &DataFrame, bounds: &GeoBounds) -> Option<Issue> {
    let coordinates = floats(df, CheckKind::GeoBounds, ListingColumn::Latitude).and_then(|lat| {
        floats(df, CheckKind::GeoBounds, ListingColumn::Longitude).map(|lon| (lat, lon))
    });
    let (latitudes, longitudes) = match coordinates {
        Ok(pair) => pair,
        Err(issue) => return Some(issue),
    };

    let mut violating = 0u64;
    let mut samples = Vec::new();
    for (row, (lat, lon)) in latitudes.into_iter().zip(longitudes.into_iter()).enumerate() {
        let inside = matches!((lat, lon), (Some(lat), Some(lon)) if bounds.contains(lat, lon));
        if inside {
            continue;
        }
        violating += 1;
        if samples.len() < MAX_SAMPLES {
            samples.push(format!(
                "row {row} ({}, {})",
                display_value(lat),
                display_value(lon)
            ));
        }
    }

    (violating > 0).then(|| Issue::OutOfBounds {
        bounds: *bounds,
        violating,
        samples,
    })
}
