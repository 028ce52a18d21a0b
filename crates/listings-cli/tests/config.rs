//! Config discovery and flag/file precedence.

use std::fs;
use std::path::Path;

use listings_cli::config::{Config, ConfigError, DEFAULT_CONFIG_FILE, ValidateFlags};
use listings_model::{PriceRange, RowCountBounds};
use listings_validate::KlConvention;

const FULL: &str = r#"
[store]
root = "artifacts"

[clean]
min_price = 10.0
max_price = 350.0

[validate]
min_price = 10.0
max_price = 350.0
kl_threshold = 0.2
min_rows = 100
max_rows = 5000
kl_smoothing = 0.5
"#;

fn full() -> Config {
    Config::parse(FULL, Path::new(DEFAULT_CONFIG_FILE)).unwrap()
}

#[test]
fn clean_price_comes_from_file() {
    assert_eq!(
        full().clean_price(None, None).unwrap(),
        PriceRange::new(10.0, 350.0).unwrap()
    );
}

#[test]
fn clean_flags_override_file() {
    assert_eq!(
        full().clean_price(Some(20.0), None).unwrap(),
        PriceRange::new(20.0, 350.0).unwrap()
    );
}

#[test]
fn clean_price_is_required() {
    let err = Config::default().clean_price(Some(10.0), None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Missing {
            flag: "--max-price",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "`--max-price` is required (pass it or set `clean.max_price` in listings.toml)"
    );
}

#[test]
fn inverted_price_bounds_are_rejected() {
    let err = Config::default()
        .clean_price(Some(500.0), Some(10.0))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn validation_params_from_file() {
    let params = full().validation_params(&ValidateFlags::default()).unwrap();
    assert_eq!(params.price, PriceRange::new(10.0, 350.0).unwrap());
    assert_eq!(params.kl_threshold, 0.2);
    assert_eq!(params.rows, RowCountBounds::new(100, 5000).unwrap());
    assert_eq!(
        params.kl_convention,
        KlConvention::Smoothed { pseudocount: 0.5 }
    );
}

#[test]
fn validation_flags_override_file() {
    let flags = ValidateFlags {
        min_price: Some(0.0),
        max_price: Some(1_000.0),
        kl_threshold: Some(1.5),
    };
    let params = full().validation_params(&flags).unwrap();
    assert_eq!(params.price, PriceRange::new(0.0, 1_000.0).unwrap());
    assert_eq!(params.kl_threshold, 1.5);
}

#[test]
fn validation_defaults_without_file() {
    let flags = ValidateFlags {
        min_price: Some(10.0),
        max_price: Some(350.0),
        kl_threshold: Some(0.2),
    };
    let params = Config::default().validation_params(&flags).unwrap();
    assert_eq!(params.rows, RowCountBounds::default());
    assert_eq!(params.kl_convention, KlConvention::Standard);
}

#[test]
fn kl_threshold_must_be_positive() {
    let flags = ValidateFlags {
        min_price: Some(10.0),
        max_price: Some(350.0),
        kl_threshold: Some(0.0),
    };
    assert!(matches!(
        Config::default().validation_params(&flags),
        Err(ConfigError::InvalidThreshold(_))
    ));
}

#[test]
fn discover_prefers_explicit_then_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), FULL).unwrap();
    assert_eq!(Config::discover(None, dir.path()).unwrap(), full());

    let other = dir.path().join("other.toml");
    fs::write(&other, "[clean]\nmin_price = 1.0\nmax_price = 2.0\n").unwrap();
    let explicit = Config::discover(Some(&other), dir.path()).unwrap();
    assert_eq!(explicit.clean.min_price, Some(1.0));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Config::discover(Some(&missing), dir.path()),
        Err(ConfigError::Read { .. })
    ));
}
