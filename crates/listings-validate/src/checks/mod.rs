//! The six independent checks.
//!
//! Every check returns `None` on pass and `Some(issue)` on failure. Columns
//! a check needs but cannot read become issues of that check.

mod boroughs;
mod columns;
mod distribution;
mod geo;
mod price;
mod rows;

pub use boroughs::check_boroughs;
pub use columns::check_columns;
pub use distribution::{check_distribution, distribution_drift, drift_issue};
pub use geo::check_geo_bounds;
pub use price::check_price_range;
pub use rows::check_row_count;

use listings_ingest::{float_column, string_column};
use listings_model::ListingColumn;
use polars::prelude::{DataFrame, Float64Chunked, StringChunked};

use crate::issue::{CheckKind, Issue};

/// Issues keep at most this many example values.
pub const MAX_SAMPLES: usize = 5;

fn ensure_present(df: &DataFrame, check: CheckKind, column: ListingColumn) -> Result<(), Issue> {
    if df.get_column_index(column.name()).is_some() {
        Ok(())
    } else {
        Err(Issue::MissingColumn {
            check,
            column: column.name().to_string(),
        })
    }
}

fn floats(
    df: &DataFrame,
    check: CheckKind,
    column: ListingColumn,
) -> Result<Float64Chunked, Issue> {
    ensure_present(df, check, column)?;
    float_column(df, column.name()).map_err(|err| Issue::UnreadableColumn {
        check,
        column: column.name().to_string(),
        reason: err.to_string(),
    })
}

fn strings<'a>(
    df: &'a DataFrame,
    check: CheckKind,
    column: ListingColumn,
) -> Result<&'a StringChunked, Issue> {
    ensure_present(df, check, column)?;
    string_column(df, column.name()).map_err(|err| Issue::UnreadableColumn {
        check,
        column: column.name().to_string(),
        reason: err.to_string(),
    })
}

fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}
