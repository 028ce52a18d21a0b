//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use std::fmt;

use listings_model::{GeoBounds, PriceRange, RowCountBounds};
use serde::Serialize;

/// The six checks of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    ColumnOrder,
    BoroughSet,
    GeoBounds,
    Distribution,
    RowCount,
    PriceRange,
}

impl CheckKind {
    pub const ALL: [CheckKind; 6] = [
        CheckKind::ColumnOrder,
        CheckKind::BoroughSet,
        CheckKind::GeoBounds,
        CheckKind::Distribution,
        CheckKind::RowCount,
        CheckKind::PriceRange,
    ];

    pub fn rule_id(&self) -> &'static str {
        match self {
            CheckKind::ColumnOrder => "LST001",
            CheckKind::BoroughSet => "LST002",
            CheckKind::GeoBounds => "LST003",
            CheckKind::Distribution => "LST004",
            CheckKind::RowCount => "LST005",
            CheckKind::PriceRange => "LST006",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::ColumnOrder => "column order",
            CheckKind::BoroughSet => "borough set",
            CheckKind::GeoBounds => "geographic bounds",
            CheckKind::Distribution => "distribution drift",
            CheckKind::RowCount => "row count",
            CheckKind::PriceRange => "price range",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation issue - one per failing check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Column names differ from the contract as an ordered sequence
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// Distinct `neighbourhood_group` values differ from the borough set
    BoroughMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// Rows with coordinates outside the box (or without coordinates)
    OutOfBounds {
        bounds: GeoBounds,
        violating: u64,
        samples: Vec<String>,
    },
    /// Divergence from the reference reached the threshold
    DistributionDrift { divergence: f64, threshold: f64 },
    /// Row count outside the exclusive window
    RowCountOutOfRange { rows: usize, bounds: RowCountBounds },
    /// Rows priced outside the inclusive window (or without a price)
    PriceOutOfRange {
        range: PriceRange,
        violating: u64,
        samples: Vec<String>,
    },
    /// A column the check reads is absent
    MissingColumn { check: CheckKind, column: String },
    /// A column the check reads has an unusable type
    UnreadableColumn {
        check: CheckKind,
        column: String,
        reason: String,
    },
}

impl Issue {
    /// Check that produced this issue.
    pub fn check(&self) -> CheckKind {
        match self {
            Issue::ColumnMismatch { .. } => CheckKind::ColumnOrder,
            Issue::BoroughMismatch { .. } => CheckKind::BoroughSet,
            Issue::OutOfBounds { .. } => CheckKind::GeoBounds,
            Issue::DistributionDrift { .. } => CheckKind::Distribution,
            Issue::RowCountOutOfRange { .. } => CheckKind::RowCount,
            Issue::PriceOutOfRange { .. } => CheckKind::PriceRange,
            Issue::MissingColumn { check, .. } | Issue::UnreadableColumn { check, .. } => *check,
        }
    }

    pub fn rule_id(&self) -> &'static str {
        self.check().rule_id()
    }

    /// Count of offending rows or values (if applicable).
    pub fn count(&self) -> Option<u64> {
        match self {
            Issue::BoroughMismatch {
                missing,
                unexpected,
            } => Some((missing.len() + unexpected.len()) as u64),
            Issue::OutOfBounds { violating, .. } | Issue::PriceOutOfRange { violating, .. } => {
                Some(*violating)
            }
            Issue::RowCountOutOfRange { rows, .. } => Some(*rows as u64),
            Issue::ColumnMismatch { .. }
            | Issue::DistributionDrift { .. }
            | Issue::MissingColumn { .. }
            | Issue::UnreadableColumn { .. } => None,
        }
    }

    /// Sample offending values, at most a handful.
    pub fn samples(&self) -> &[String] {
        match self {
            Issue::OutOfBounds { samples, .. } | Issue::PriceOutOfRange { samples, .. } => samples,
            Issue::BoroughMismatch { unexpected, .. } => unexpected,
            _ => &[],
        }
    }

    pub fn format_message(&self) -> String {
        match self {
            Issue::ColumnMismatch { expected, actual } => column_mismatch_message(expected, actual),
            Issue::BoroughMismatch {
                missing,
                unexpected,
            } => {
                let mut parts = Vec::new();
                if !missing.is_empty() {
                    parts.push(format!("missing borough(s): {}", missing.join(", ")));
                }
                if !unexpected.is_empty() {
                    parts.push(format!("unexpected value(s): {}", unexpected.join(", ")));
                }
                format!("neighbourhood_group {}", parts.join("; "))
            }
            Issue::OutOfBounds {
                bounds,
                violating,
                samples,
            } => with_samples(
                format!(
                    "{violating} row(s) outside latitude [{}, {}] / longitude [{}, {}]",
                    bounds.min_latitude,
                    bounds.max_latitude,
                    bounds.min_longitude,
                    bounds.max_longitude
                ),
                samples,
            ),
            Issue::DistributionDrift {
                divergence,
                threshold,
            } => format!(
                "neighbourhood_group KL divergence {divergence:.4} bits is not below threshold {threshold}"
            ),
            Issue::RowCountOutOfRange { rows, bounds } => format!(
                "row count {rows} not strictly between {} and {}",
                bounds.min, bounds.max
            ),
            Issue::PriceOutOfRange {
                range,
                violating,
                samples,
            } => with_samples(
                format!(
                    "{violating} row(s) with price outside [{}, {}]",
                    range.min, range.max
                ),
                samples,
            ),
            Issue::MissingColumn { check, column } => {
                format!("{check} check needs column `{column}`, which is absent")
            }
            Issue::UnreadableColumn {
                check,
                column,
                reason,
            } => format!("{check} check cannot read column `{column}`: {reason}"),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_message())
    }
}

fn with_samples(message: String, samples: &[String]) -> String {
    if samples.is_empty() {
        message
    } else {
        format!("{message}; e.g. {}", samples.join(", "))
    }
}

fn column_mismatch_message(expected: &[String], actual: &[String]) -> String {
    let missing: Vec<&str> = expected
        .iter()
        .filter(|name| !actual.contains(name))
        .map(String::as_str)
        .collect();
    let extra: Vec<&str> = actual
        .iter()
        .filter(|name| !expected.contains(name))
        .map(String::as_str)
        .collect();
    if missing.is_empty() && extra.is_empty() {
        // Same names, different order (or duplicates).
        let position = expected
            .iter()
            .zip(actual)
            .position(|(e, a)| e != a)
            .unwrap_or(expected.len().min(actual.len()));
        return match (expected.get(position), actual.get(position)) {
            (Some(e), Some(a)) => format!(
                "columns out of order at position {position}: expected `{e}`, found `{a}`"
            ),
            _ => format!(
                "expected {} columns, found {}",
                expected.len(),
                actual.len()
            ),
        };
    }
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing column(s): {}", missing.join(", ")));
    }
    if !extra.is_empty() {
        parts.push(format!("unexpected column(s): {}", extra.join(", ")));
    }
    parts.join("; ")
}
