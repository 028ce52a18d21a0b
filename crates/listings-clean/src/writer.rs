use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::{CleanError, Result};

/// Write a frame as comma-separated text with a header row and no index.
///
/// Dates are written as `YYYY-MM-DD`; output is deterministic for a given
/// frame.
pub fn write_listings_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| CleanError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut out)?;
    Ok(())
}
