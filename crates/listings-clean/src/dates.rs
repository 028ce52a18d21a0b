//! Free-text review date parsing.
//!
//! `last_review` arrives as free text. Values that match one of the known
//! layouts become calendar dates; anything else becomes null without
//! dropping the row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use listings_ingest::string_column;
use listings_model::ListingColumn;
use polars::prelude::{DataFrame, DataType, NamedFrom, PlSmallStr, Series};

use crate::error::Result;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse one review date. Time components, when present, are dropped.
pub fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

fn days_since_epoch(date: NaiveDate) -> Option<i32> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    i32::try_from(date.signed_duration_since(epoch).num_days()).ok()
}

/// Replace the text `last_review` column with a `Date` column.
pub fn parse_review_dates(df: &mut DataFrame) -> Result<()> {
    let name = ListingColumn::LastReview.name();
    let days: Vec<Option<i32>> = string_column(df, name)?
        .into_iter()
        .map(|value| value.and_then(parse_review_date).and_then(days_since_epoch))
        .collect();
    let dates = Series::new(PlSmallStr::from(name), days).cast(&DataType::Date)?;
    df.with_column(dates)?;
    Ok(())
}
