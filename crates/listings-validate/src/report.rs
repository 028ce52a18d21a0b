//! Per-check outcomes and the JSON report.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::issue::{CheckKind, Issue};
use crate::params::ValidationParams;

pub const REPORT_SCHEMA: &str = "listings.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// Not run, e.g. no reference dataset for the distribution check.
    Skipped,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub status: CheckStatus,
    pub issue: Option<Issue>,
}

impl CheckOutcome {
    pub fn from_issue(check: CheckKind, issue: Option<Issue>) -> Self {
        let status = if issue.is_some() {
            CheckStatus::Failed
        } else {
            CheckStatus::Passed
        };
        Self {
            check,
            status,
            issue,
        }
    }

    pub fn skipped(check: CheckKind) -> Self {
        Self {
            check,
            status: CheckStatus::Skipped,
            issue: None,
        }
    }

    pub fn message(&self) -> String {
        self.issue.as_ref().map_or_else(String::new, Issue::format_message)
    }
}

/// Outcome of every check for one candidate dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub rows: usize,
    pub params: ValidationParams,
    /// Divergence from the reference, when one was computed.
    pub divergence: Option<f64>,
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.check == check)
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.outcomes.iter().filter_map(|outcome| outcome.issue.as_ref())
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(CheckStatus::Failed) > 0
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.payload())?;
        fs::write(path, format!("{json}\n"))
    }

    fn payload(&self) -> ReportPayload<'_> {
        ReportPayload {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            rows: self.rows,
            params: &self.params,
            divergence: self.divergence.filter(|d| d.is_finite()),
            passed: self.count(CheckStatus::Passed),
            failed: self.count(CheckStatus::Failed),
            skipped: self.count(CheckStatus::Skipped),
            checks: self
                .outcomes
                .iter()
                .map(|outcome| CheckJson {
                    check: outcome.check,
                    rule_id: outcome.check.rule_id(),
                    status: outcome.status,
                    message: outcome.issue.as_ref().map(Issue::format_message),
                    count: outcome.issue.as_ref().and_then(Issue::count),
                    issue: outcome.issue.as_ref(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    rows: usize,
    params: &'a ValidationParams,
    divergence: Option<f64>,
    passed: usize,
    failed: usize,
    skipped: usize,
    checks: Vec<CheckJson<'a>>,
}

#[derive(Serialize)]
struct CheckJson<'a> {
    check: CheckKind,
    rule_id: &'static str,
    status: CheckStatus,
    message: Option<String>,
    count: Option<u64>,
    issue: Option<&'a Issue>,
}
