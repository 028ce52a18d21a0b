use listings_model::{GeoBounds, NYC_BOUNDS, PriceRange, RowCountBounds};
use serde::{Deserialize, Serialize};

use crate::distribution::KlConvention;

/// Thresholds for one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationParams {
    pub price: PriceRange,
    /// The distribution check fails when divergence reaches this value.
    pub kl_threshold: f64,
    pub rows: RowCountBounds,
    pub kl_convention: KlConvention,
    pub bounds: GeoBounds,
}

impl ValidationParams {
    /// Default row window, NYC box and the standard KL convention.
    pub fn new(price: PriceRange, kl_threshold: f64) -> Self {
        Self {
            price,
            kl_threshold,
            rows: RowCountBounds::default(),
            kl_convention: KlConvention::Standard,
            bounds: NYC_BOUNDS,
        }
    }

    pub fn with_rows(mut self, rows: RowCountBounds) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_kl_convention(mut self, convention: KlConvention) -> Self {
        self.kl_convention = convention;
        self
    }
}
