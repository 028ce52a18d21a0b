//! Listing frame builders shared by the integration tests.

#![allow(dead_code)]

use listings_ingest::column_names;
use listings_model::LISTING_COLUMNS;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

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
            group: "Manhattan",
            latitude,
            longitude,
            price,
            last_review: Some("2019-05-21"),
        }
    }

    pub fn with_review(mut self, review: Option<&'static str>) -> Self {
        self.last_review = review;
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
