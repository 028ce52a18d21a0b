//! The five boroughs accepted in `neighbourhood_group`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Borough {
    Bronx,
    Brooklyn,
    Manhattan,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// All boroughs, sorted by label.
    pub const ALL: [Borough; 5] = [
        Self::Bronx,
        Self::Brooklyn,
        Self::Manhattan,
        Self::Queens,
        Self::StatenIsland,
    ];

    /// Label exactly as it appears in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bronx => "Bronx",
            Self::Brooklyn => "Brooklyn",
            Self::Manhattan => "Manhattan",
            Self::Queens => "Queens",
            Self::StatenIsland => "Staten Island",
        }
    }

    /// Labels of all boroughs, sorted.
    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Borough {
    type Err = ModelError;

    /// Matches labels exactly; the dataset contract is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|borough| borough.label() == s)
            .ok_or_else(|| ModelError::UnknownBorough(s.to_string()))
    }
}
