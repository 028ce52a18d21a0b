//! Row filters and the cleaning core.

use listings_ingest::require_listing_columns;
use listings_model::{GeoBounds, LISTING_COLUMNS, ListingColumn, NYC_BOUNDS, PriceRange};
use polars::prelude::{DataFrame, Expr, IntoLazy, col, lit};
use tracing::debug;

use crate::dates::parse_review_dates;
use crate::error::Result;

/// Rows surviving each stage of [`clean_listings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanStats {
    pub input_rows: usize,
    pub after_price_filter: usize,
    pub after_location_filter: usize,
    /// Non-empty `last_review` values that did not parse as a date.
    pub unparsed_review_dates: usize,
}

impl CleanStats {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.after_location_filter
    }
}

/// Output of [`clean_listings`].
#[derive(Debug, Clone)]
pub struct Cleaned {
    pub frame: DataFrame,
    pub stats: CleanStats,
}

fn between(column: ListingColumn, min: f64, max: f64) -> Expr {
    col(column.name())
        .gt_eq(lit(min))
        .and(col(column.name()).lt_eq(lit(max)))
}

/// `min <= price <= max`. Null prices do not match.
pub fn price_filter(range: PriceRange) -> Expr {
    between(ListingColumn::Price, range.min, range.max)
}

/// Longitude and latitude both inside `bounds`, edges included.
pub fn location_filter(bounds: &GeoBounds) -> Expr {
    between(
        ListingColumn::Longitude,
        bounds.min_longitude,
        bounds.max_longitude,
    )
    .and(between(
        ListingColumn::Latitude,
        bounds.min_latitude,
        bounds.max_latitude,
    ))
}

fn count_present(df: &DataFrame, column: ListingColumn) -> Result<usize> {
    let values = df.column(column.name())?;
    Ok(values.len() - values.null_count())
}

/// Clean a raw listings frame.
///
/// Works on a copy; `raw` is left untouched. Rows are dropped, never
/// clamped. `min_price <= max_price` is assumed, not checked. The result
/// carries exactly the contract columns in contract order.
pub fn clean_listings(raw: &DataFrame, price: PriceRange) -> Result<Cleaned> {
    require_listing_columns(raw)?;
    let input_rows = raw.height();

    let working = raw.clone();
    let mut priced = working.lazy().filter(price_filter(price)).collect()?;
    let after_price_filter = priced.height();
    debug!(
        input_rows,
        after_price_filter,
        min_price = price.min,
        max_price = price.max,
        "applied price filter"
    );

    let raw_reviews = count_present(&priced, ListingColumn::LastReview)?;
    parse_review_dates(&mut priced)?;
    let unparsed_review_dates =
        raw_reviews.saturating_sub(count_present(&priced, ListingColumn::LastReview)?);
    if unparsed_review_dates > 0 {
        debug!(unparsed_review_dates, "review dates set to null");
    }

    let located = priced
        .lazy()
        .filter(location_filter(&NYC_BOUNDS))
        .collect()?
        .select(LISTING_COLUMNS)?;
    let after_location_filter = located.height();
    debug!(after_location_filter, "applied location filter");

    Ok(Cleaned {
        frame: located,
        stats: CleanStats {
            input_rows,
            after_price_filter,
            after_location_filter,
            unparsed_review_dates,
        },
    })
}
