//! Running the whole suite and exporting the report.

mod common;

use common::{listings_frame, rows_in_group, valid_rows};
use listings_model::{PriceRange, RowCountBounds};
use listings_validate::{
    CheckKind, CheckStatus, REPORT_SCHEMA, ValidationParams, validate_listings,
};

fn params() -> ValidationParams {
    ValidationParams::new(PriceRange::new(10.0, 350.0).unwrap(), 0.2)
        .with_rows(RowCountBounds::new(10, 1_000).unwrap())
}

#[test]
fn clean_dataset_passes_every_check() {
    let df = listings_frame(&valid_rows(100));
    let report = validate_listings(&df, Some(&df), &params());

    assert_eq!(report.rows, 100);
    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.count(CheckStatus::Passed), 6);
    assert!(!report.has_failures());
    assert_eq!(report.divergence, Some(0.0));
}

#[test]
fn distribution_is_skipped_without_reference() {
    let df = listings_frame(&valid_rows(100));
    let report = validate_listings(&df, None, &params());

    let outcome = report.outcome(CheckKind::Distribution).unwrap();
    assert_eq!(outcome.status, CheckStatus::Skipped);
    assert_eq!(report.count(CheckStatus::Passed), 5);
    assert_eq!(report.divergence, None);
    assert!(!report.has_failures());
}

#[test]
fn failures_do_not_suppress_other_checks() {
    let mut rows = valid_rows(100);
    rows[0].price = 1_000.0;
    rows[1].latitude = 42.0;
    let candidate = listings_frame(&rows);
    let reference = listings_frame(&rows_in_group(100, "Queens"));

    let report = validate_listings(&candidate, Some(&reference), &params());

    let status = |check| report.outcome(check).unwrap().status;
    assert_eq!(status(CheckKind::PriceRange), CheckStatus::Failed);
    assert_eq!(status(CheckKind::GeoBounds), CheckStatus::Failed);
    assert_eq!(status(CheckKind::Distribution), CheckStatus::Failed);
    assert_eq!(status(CheckKind::ColumnOrder), CheckStatus::Passed);
    assert_eq!(status(CheckKind::BoroughSet), CheckStatus::Passed);
    assert_eq!(status(CheckKind::RowCount), CheckStatus::Passed);
    assert!(report.has_failures());
    assert_eq!(report.issues().count(), 3);
}

#[test]
fn report_json_lists_every_check() {
    let mut rows = valid_rows(100);
    rows[5].price = 0.0;
    let df = listings_frame(&rows);
    let report = validate_listings(&df, Some(&df), &params());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("validation.json");
    report.write_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["schema"], REPORT_SCHEMA);
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["rows"], 100);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["passed"], 5);
    assert_eq!(json["params"]["kl_convention"]["convention"], "standard");

    let checks = json["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 6);
    let price = checks
        .iter()
        .find(|check| check["check"] == "price_range")
        .unwrap();
    assert_eq!(price["rule_id"], "LST006");
    assert_eq!(price["status"], "failed");
    assert_eq!(price["count"], 1);
    assert_eq!(price["issue"]["kind"], "price_out_of_range");
    assert_eq!(price["issue"]["samples"][0], "row 5: 0");
}
