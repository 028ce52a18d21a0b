//! Categorical frequency distributions and KL divergence between them.

use std::collections::{BTreeMap, BTreeSet};

use listings_ingest::{Result, string_column};
use listings_model::ListingColumn;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Counts per category label, sorted by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDistribution {
    counts: BTreeMap<String, u64>,
}

impl CategoryDistribution {
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut distribution = Self::default();
        for (label, count) in counts {
            *distribution.counts.entry(label.into()).or_default() += count;
        }
        distribution
    }

    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_default() += 1;
    }

    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Frequency distribution of `neighbourhood_group`; nulls are not counted.
pub fn neighbourhood_group_distribution(df: &DataFrame) -> Result<CategoryDistribution> {
    let groups = string_column(df, ListingColumn::NeighbourhoodGroup.name())?;
    let mut distribution = CategoryDistribution::default();
    for group in groups.into_iter().flatten() {
        distribution.add(group);
    }
    Ok(distribution)
}

/// How zero counts are treated when computing divergence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "snake_case")]
pub enum KlConvention {
    /// `0 * log(0 / q) = 0`; `p * log(p / 0) = inf` for `p > 0`.
    #[default]
    Standard,
    /// Adds `pseudocount` to every category of the union before normalizing.
    Smoothed { pseudocount: f64 },
}

impl KlConvention {
    /// Standard for a non-positive pseudocount, smoothed otherwise.
    pub fn from_pseudocount(pseudocount: f64) -> Self {
        if pseudocount > 0.0 {
            KlConvention::Smoothed { pseudocount }
        } else {
            KlConvention::Standard
        }
    }

    fn pseudocount(&self) -> f64 {
        match self {
            KlConvention::Standard => 0.0,
            KlConvention::Smoothed { pseudocount } => *pseudocount,
        }
    }
}

/// KL divergence of `candidate` relative to `reference`, in bits.
///
/// Both distributions are aligned on the union of their labels and
/// normalized. Returns `NaN` when either side has no mass.
pub fn kl_divergence(
    candidate: &CategoryDistribution,
    reference: &CategoryDistribution,
    convention: KlConvention,
) -> f64 {
    let labels: BTreeSet<&str> = candidate.labels().chain(reference.labels()).collect();
    let alpha = convention.pseudocount();
    let smoothing = alpha * labels.len() as f64;
    let p_total = candidate.total() as f64 + smoothing;
    let q_total = reference.total() as f64 + smoothing;
    if p_total <= 0.0 || q_total <= 0.0 {
        return f64::NAN;
    }

    let mut divergence = 0.0;
    for label in labels {
        let p = (candidate.count(label) as f64 + alpha) / p_total;
        let q = (reference.count(label) as f64 + alpha) / q_total;
        if p == 0.0 {
            continue;
        }
        if q == 0.0 {
            return f64::INFINITY;
        }
        divergence += p * (p / q).log2();
    }
    divergence
}
