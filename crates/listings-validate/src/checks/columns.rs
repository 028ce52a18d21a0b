use listings_ingest::column_names;
use listings_model::LISTING_COLUMNS;
use polars::prelude::DataFrame;

use crate::issue::Issue;

/// Column names must equal the contract as an ordered sequence.
pub fn check_columns(df: &DataFrame) -> Option<Issue> {
    let actual = column_names(df);
    if actual.iter().map(String::as_str).eq(LISTING_COLUMNS) {
        return None;
    }
    Some(Issue::ColumnMismatch {
        expected: LISTING_COLUMNS.iter().map(ToString::to_string).collect(),
        actual,
    })
}
