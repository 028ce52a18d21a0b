//! Listings data ingestion.
//!
//! Loads a listings CSV into a Polars `DataFrame` with the dtypes of the
//! listing contract applied by column name, instead of relying on type
//! inference over the first rows.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listings_ingest::{read_listings_csv, require_listing_columns};
//!
//! let df = read_listings_csv(Path::new("sample.csv"))?;
//! require_listing_columns(&df)?;
//! ```

mod columns;
mod error;
mod reader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{listing_dtype, listing_schema_overrides, read_csv_header, read_listings_csv};

// === Column Access ===
pub use columns::{column_names, missing_listing_columns, require_listing_columns};
pub use values::{float_column, string_column};
