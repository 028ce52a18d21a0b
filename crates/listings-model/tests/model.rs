//! Tests for listings-model types.

use listings_model::{Borough, ColumnKind, LISTING_COLUMNS, ListingColumn, PriceRange};

#[test]
fn contract_has_sixteen_unique_columns() {
    let mut names = LISTING_COLUMNS.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 16);
}

#[test]
fn numeric_columns_are_typed() {
    assert_eq!(ListingColumn::Price.kind(), ColumnKind::Float);
    assert_eq!(ListingColumn::Id.kind(), ColumnKind::Integer);
    assert_eq!(ListingColumn::Availability365.kind(), ColumnKind::Integer);
    assert_eq!(ListingColumn::NeighbourhoodGroup.kind(), ColumnKind::Categorical);
}

#[test]
fn borough_serializes_with_dataset_label() {
    let json = serde_json::to_string(&Borough::StatenIsland).expect("serialize borough");
    assert_eq!(json, "\"Staten Island\"");
    let round: Borough = serde_json::from_str(&json).expect("deserialize borough");
    assert_eq!(round, Borough::StatenIsland);
}

#[test]
fn price_range_round_trips_through_json() {
    let range = PriceRange::new(10.0, 350.0).expect("valid range");
    let json = serde_json::to_string(&range).expect("serialize range");
    assert_eq!(json, r#"{"min":10.0,"max":350.0}"#);
}
