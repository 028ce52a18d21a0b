//! Cleaning stage of the listings pipeline.
//!
//! Given a raw listings dataset, [`clean_listings`] keeps rows whose price
//! is inside the requested window, turns `last_review` into a calendar
//! date and drops rows outside the New York City bounding box.
//! [`run_cleaning`] wraps that core with artifact resolution, CSV output
//! and publication of the result as a new artifact version.

mod dates;
mod error;
mod filters;
mod run;
mod writer;

pub use dates::{parse_review_date, parse_review_dates};
pub use error::{CleanError, Result};
pub use filters::{CleanStats, Cleaned, clean_listings, location_filter, price_filter};
pub use run::{CleanRequest, CleanSummary, OUTPUT_FILE_NAME, run_cleaning};
pub use writer::write_listings_csv;
