//! Integration tests for typed listings loading.

use std::io::Write;

use listings_ingest::{
    IngestError, column_names, float_column, missing_listing_columns, read_listings_csv,
    require_listing_columns, string_column,
};
use listings_model::LISTING_COLUMNS;
use tempfile::NamedTempFile;

const HEADER: &str = "id,name,host_id,host_name,neighbourhood_group,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn sample_rows() -> String {
    [
        "2539,Clean & quiet apt home by the park,2787,John,Brooklyn,Kensington,40.64749,-73.97237,Private room,149,1,9,2018-10-19,0.21,6,365",
        "2595,Skylit Midtown Castle,2845,Jennifer,Manhattan,Midtown,40.75362,-73.98377,Entire home/apt,225,1,45,2019-05-21,0.38,2,355",
        "3647,THE VILLAGE OF HARLEM....NEW YORK !,4632,Elisabeth,Manhattan,Harlem,40.80902,-73.94190,Private room,150,3,0,,,1,365",
    ]
    .join("\n")
}

#[test]
fn reads_full_contract() {
    let file = write_csv(&format!("{HEADER}\n{}\n", sample_rows()));
    let df = read_listings_csv(file.path()).unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(column_names(&df), LISTING_COLUMNS.to_vec());
    require_listing_columns(&df).unwrap();

    let prices = float_column(&df, "price").unwrap();
    assert_eq!(prices.get(0), Some(149.0));
    let groups = string_column(&df, "neighbourhood_group").unwrap();
    assert_eq!(groups.get(1), Some("Manhattan"));
    let per_month = float_column(&df, "reviews_per_month").unwrap();
    assert_eq!(per_month.get(2), None);
}

#[test]
fn preserves_permuted_column_order() {
    let mut names: Vec<&str> = LISTING_COLUMNS.to_vec();
    names.swap(0, 1);
    let file = write_csv(&format!(
        "{}\nname-first,1,2,h,Queens,Astoria,40.76,-73.92,Private room,80,1,0,,,1,0\n",
        names.join(",")
    ));
    let df = read_listings_csv(file.path()).unwrap();

    assert_eq!(column_names(&df)[0], "name");
    assert_eq!(column_names(&df)[1], "id");
    require_listing_columns(&df).unwrap();
}

#[test]
fn reports_missing_columns() {
    let file = write_csv("id,name,price\n1,a,10\n");
    let df = read_listings_csv(file.path()).unwrap();

    let missing = missing_listing_columns(&df);
    assert_eq!(missing.len(), 13);
    assert!(missing.contains(&"latitude"));
    assert!(matches!(
        require_listing_columns(&df),
        Err(IngestError::MissingColumns { .. })
    ));
}

#[test]
fn non_numeric_price_is_a_parse_error() {
    let file = write_csv("id,price\n1,cheap\n");
    let result = read_listings_csv(file.path());

    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
}
