//! CSV file reading with the listing dtypes applied by column name.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use csv::ReaderBuilder;
use listings_model::{ColumnKind, ListingColumn};
use polars::prelude::{CsvReadOptions, DataFrame, DataType, PlSmallStr, Schema, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Polars dtype used to load a listing column.
///
/// Dates stay text at load time; turning free-text dates into calendar
/// dates is a cleaning step, not an ingest step.
pub fn listing_dtype(column: ListingColumn) -> DataType {
    match column.kind() {
        ColumnKind::Integer => DataType::Int64,
        ColumnKind::Float => DataType::Float64,
        ColumnKind::Text | ColumnKind::Categorical | ColumnKind::Date => DataType::String,
    }
}

/// Build dtype overrides for every known listing column in `headers`.
///
/// Unknown columns are left to Polars inference so that a dataset with an
/// unexpected column still loads and can be reported by validation.
pub fn listing_schema_overrides<S: AsRef<str>>(headers: &[S]) -> Schema {
    let mut schema = Schema::with_capacity(headers.len());
    for header in headers {
        if let Some(column) = ListingColumn::from_name(header.as_ref()) {
            schema.with_column(PlSmallStr::from(column.name()), listing_dtype(column));
        }
    }
    schema
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the header row of a CSV file, in file order.
pub fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let file = open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let record = reader.headers().map_err(|e| IngestError::Header {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            // Skip BOM if present
            let name = if idx == 0 {
                name.strip_prefix('\u{feff}').unwrap_or(name)
            } else {
                name
            };
            name.to_string()
        })
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads a listings CSV into a Polars DataFrame.
///
/// Column order is preserved as found in the file. Known listing columns
/// get their contract dtype; a value that does not parse as that dtype is
/// a parse error.
pub fn read_listings_csv(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_header(path)?;
    let overrides = listing_schema_overrides(&headers);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(overrides)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded listings csv"
    );
    Ok(df)
}
