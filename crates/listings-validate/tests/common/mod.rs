//! Listing fixtures for the validation tests.

#![allow(dead_code)]

use listings_ingest::column_names;
use listings_model::LISTING_COLUMNS;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

pub const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

#[derive(Debug, Clone)]
pub struct Row {
    pub id: i64,
    pub group: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub last_review: Option<&'static str>,
}

impl Row {
    pub fn new(id: i64, price: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            group: BOROUGHS[(id % 5) as usize],
            latitude,
            longitude,
            price,
            last_review: Some("2019-05-21"),
        }
    }

    pub fn in_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }
}

/// A frame with every contract column, in contract order.
pub fn listings_frame(rows: &[Row]) -> DataFrame {
    let n = rows.len();
    let df = DataFrame::new(vec![
        Series::new("id".into(), rows.iter().map(|r| r.id).collect::<Vec<_>>()).into_column(),
        Series::new(
            "name".into(),
            rows.iter().map(|r| format!("Listing {}", r.id)).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("host_id".into(), rows.iter().map(|r| r.id * 10).collect::<Vec<_>>())
            .into_column(),
        Series::new("host_name".into(), vec!["Host"; n]).into_column(),
        Series::new(
            "neighbourhood_group".into(),
            rows.iter().map(|r| r.group).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("neighbourhood".into(), vec!["Midtown"; n]).into_column(),
        Series::new(
            "latitude".into(),
            rows.iter().map(|r| r.latitude).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "longitude".into(),
            rows.iter().map(|r| r.longitude).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("room_type".into(), vec!["Private room"; n]).into_column(),
        Series::new("price".into(), rows.iter().map(|r| r.price).collect::<Vec<_>>())
            .into_column(),
        Series::new("minimum_nights".into(), vec![1i64; n]).into_column(),
        Series::new("number_of_reviews".into(), vec![3i64; n]).into_column(),
        Series::new(
            "last_review".into(),
            rows.iter().map(|r| r.last_review).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("reviews_per_month".into(), vec![Some(0.5f64); n]).into_column(),
        Series::new("calculated_host_listings_count".into(), vec![1i64; n]).into_column(),
        Series::new("availability_365".into(), vec![365i64; n]).into_column(),
    ])
    .unwrap();
    assert_eq!(column_names(&df), LISTING_COLUMNS, "fixture columns drifted");
    df
}

/// `count` valid rows spread evenly over the five boroughs.
pub fn valid_rows(count: usize) -> Vec<Row> {
    (0..count as i64)
        .map(|id| Row::new(id, 50.0 + (id % 100) as f64, 40.7, -73.95))
        .collect()
}

/// Every row in `group`.
pub fn rows_in_group(count: usize, group: &'static str) -> Vec<Row> {
    valid_rows(count)
        .into_iter()
        .map(|row| row.in_group(group))
        .collect()
}
