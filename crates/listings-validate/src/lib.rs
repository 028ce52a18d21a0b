//! Validation suite for listings datasets.
//!
//! Six independent checks run over a candidate dataset (and, for the
//! distribution check, a reference dataset). A check never errors: it
//! either passes or yields an [`Issue`]. [`validate_listings`] runs all of
//! them and collects a [`ValidationReport`].

pub mod checks;
mod distribution;
mod issue;
mod params;
mod report;
mod runner;

pub use distribution::{
    CategoryDistribution, KlConvention, kl_divergence, neighbourhood_group_distribution,
};
pub use issue::{CheckKind, Issue};
pub use params::ValidationParams;
pub use report::{
    CheckOutcome, CheckStatus, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ValidationReport,
};
pub use runner::validate_listings;
