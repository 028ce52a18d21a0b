use listings_model::RowCountBounds;
use polars::prelude::DataFrame;

use crate::issue::Issue;

/// Row count must fall strictly inside `bounds`.
pub fn check_row_count(df: &DataFrame, bounds: RowCountBounds) -> Option<Issue> {
    let rows = df.height();
    (!bounds.contains(rows)).then_some(Issue::RowCountOutOfRange { rows, bounds })
}
