//! The 16-column listing contract.
//!
//! Column order is part of the contract: datasets are written and checked
//! with exactly this sequence of names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of columns in a listings dataset.
pub const COLUMN_COUNT: usize = 16;

/// Column names in contract order.
pub const LISTING_COLUMNS: [&str; COLUMN_COUNT] = [
    "id",
    "name",
    "host_id",
    "host_name",
    "neighbourhood_group",
    "neighbourhood",
    "latitude",
    "longitude",
    "room_type",
    "price",
    "minimum_nights",
    "number_of_reviews",
    "last_review",
    "reviews_per_month",
    "calculated_host_listings_count",
    "availability_365",
];

/// Semantic type of a listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Whole numbers (identifiers and counts).
    Integer,
    /// Floating point measurements.
    Float,
    /// Free text.
    Text,
    /// Text drawn from a small set of labels.
    Categorical,
    /// Calendar date, parsed from free text during cleaning.
    Date,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Categorical => "categorical",
            Self::Date => "date",
        }
    }
}

/// One column of the listing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingColumn {
    Id,
    Name,
    HostId,
    HostName,
    NeighbourhoodGroup,
    Neighbourhood,
    Latitude,
    Longitude,
    RoomType,
    Price,
    MinimumNights,
    NumberOfReviews,
    LastReview,
    ReviewsPerMonth,
    CalculatedHostListingsCount,
    Availability365,
}

impl ListingColumn {
    /// All columns in contract order.
    pub const ALL: [ListingColumn; COLUMN_COUNT] = [
        Self::Id,
        Self::Name,
        Self::HostId,
        Self::HostName,
        Self::NeighbourhoodGroup,
        Self::Neighbourhood,
        Self::Latitude,
        Self::Longitude,
        Self::RoomType,
        Self::Price,
        Self::MinimumNights,
        Self::NumberOfReviews,
        Self::LastReview,
        Self::ReviewsPerMonth,
        Self::CalculatedHostListingsCount,
        Self::Availability365,
    ];

    /// Column name as it appears in the CSV header.
    pub fn name(self) -> &'static str {
        LISTING_COLUMNS[self.position()]
    }

    /// Zero-based position in the contract order.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Self::Id
            | Self::HostId
            | Self::MinimumNights
            | Self::NumberOfReviews
            | Self::CalculatedHostListingsCount
            | Self::Availability365 => ColumnKind::Integer,
            Self::Latitude | Self::Longitude | Self::Price | Self::ReviewsPerMonth => {
                ColumnKind::Float
            }
            Self::Name | Self::HostName => ColumnKind::Text,
            Self::NeighbourhoodGroup | Self::Neighbourhood | Self::RoomType => {
                ColumnKind::Categorical
            }
            Self::LastReview => ColumnKind::Date,
        }
    }

    /// Whether the column may hold missing values after cleaning.
    pub fn nullable(self) -> bool {
        matches!(
            self,
            Self::Name | Self::HostName | Self::LastReview | Self::ReviewsPerMonth
        )
    }

    /// Look up a column by its exact header name.
    pub fn from_name(name: &str) -> Option<Self> {
        LISTING_COLUMNS
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for ListingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListingColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}
