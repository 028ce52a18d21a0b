//! Typed column accessors.

use polars::prelude::{DataFrame, DataType, Float64Chunked, StringChunked};

use crate::error::Result;

/// Borrow a column as strings; fails if the column is absent or not text.
pub fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df.column(name)?;
    Ok(column.as_materialized_series().str()?)
}

/// Read a column as `f64`, casting integer columns.
///
/// Values that cannot be represented become null.
pub fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df.column(name)?;
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}
