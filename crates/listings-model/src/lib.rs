//! Core types for the listings cleaning and validation pipeline.
//!
//! This crate holds the column contract of a listings dataset and the
//! domain bounds shared by the cleaner and the validator. It deliberately
//! has no dataframe dependency so that both stages agree on the same
//! constants without pulling in polars.

pub mod borough;
pub mod bounds;
pub mod error;
pub mod schema;

pub use borough::Borough;
pub use bounds::{GeoBounds, NYC_BOUNDS, PriceRange, RowCountBounds};
pub use error::{ModelError, Result};
pub use schema::{COLUMN_COUNT, ColumnKind, LISTING_COLUMNS, ListingColumn};
