//! Inclusive and exclusive bounds used by both pipeline stages.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Latitude/longitude box, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Box around New York City used to drop mis-located listings.
pub const NYC_BOUNDS: GeoBounds = GeoBounds {
    min_latitude: 40.5,
    max_latitude: 41.2,
    min_longitude: -74.25,
    max_longitude: -73.50,
};

impl GeoBounds {
    pub fn contains_latitude(&self, latitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
    }

    pub fn contains_longitude(&self, longitude: f64) -> bool {
        (self.min_longitude..=self.max_longitude).contains(&longitude)
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.contains_latitude(latitude) && self.contains_longitude(longitude)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        NYC_BOUNDS
    }
}

/// Inclusive price window.
///
/// `new` rejects inverted or non-finite bounds; `unchecked` keeps the
/// caller's values as-is for stages where the ordering is a precondition
/// rather than something they verify.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(ModelError::NonFinitePrice(bound));
            }
        }
        if min > max {
            return Err(ModelError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn unchecked(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

/// Exclusive row-count window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCountBounds {
    pub min: usize,
    pub max: usize,
}

impl RowCountBounds {
    pub const DEFAULT_MIN: usize = 15_000;
    pub const DEFAULT_MAX: usize = 1_000_000;

    pub fn new(min: usize, max: usize) -> Result<Self> {
        // Both ends are exclusive, so there must be room for one value.
        if min.saturating_add(1) >= max {
            return Err(ModelError::InvalidRowBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, rows: usize) -> bool {
        self.min < rows && rows < self.max
    }
}

impl Default for RowCountBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_bounds_are_inclusive() {
        assert!(NYC_BOUNDS.contains(41.2, -73.50));
        assert!(NYC_BOUNDS.contains(40.5, -74.25));
        assert!(!NYC_BOUNDS.contains(41.3, -73.9));
        assert!(!NYC_BOUNDS.contains(40.7, -74.26));
        assert!(!NYC_BOUNDS.contains(f64::NAN, -73.9));
    }

    #[test]
    fn price_range_rejects_inverted_bounds() {
        assert_eq!(
            PriceRange::new(500.0, 10.0),
            Err(ModelError::InvalidPriceRange {
                min: 500.0,
                max: 10.0
            })
        );
        assert!(PriceRange::new(10.0, f64::INFINITY).is_err());
        let range = PriceRange::new(10.0, 10.0).unwrap();
        assert!(range.contains(10.0));
        assert!(!range.contains(10.01));
    }

    #[test]
    fn row_count_bounds_are_exclusive() {
        let bounds = RowCountBounds::default();
        assert!(!bounds.contains(15_000));
        assert!(bounds.contains(15_001));
        assert!(bounds.contains(999_999));
        assert!(!bounds.contains(1_000_000));
        assert!(RowCountBounds::new(5, 6).is_err());
        assert!(RowCountBounds::new(5, 7).is_ok());
    }
}
