use listings_model::LISTING_COLUMNS;
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};

/// Column names of a DataFrame, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Contract columns absent from the frame, in contract order.
pub fn missing_listing_columns(df: &DataFrame) -> Vec<&'static str> {
    let present = column_names(df);
    LISTING_COLUMNS
        .iter()
        .copied()
        .filter(|name| !present.iter().any(|p| p == name))
        .collect()
}

/// Fail unless every contract column is present (order is not checked here).
pub fn require_listing_columns(df: &DataFrame) -> Result<()> {
    let missing = missing_listing_columns(df);
    if missing.is_empty() {
        return Ok(());
    }
    Err(IngestError::MissingColumns {
        columns: missing.into_iter().map(String::from).collect(),
    })
}
