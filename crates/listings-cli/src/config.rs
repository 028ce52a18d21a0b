//! `listings.toml` settings and their precedence against CLI flags.
//!
//! A flag always wins over the file; the file wins over built-in defaults.
//! Price bounds and the KL threshold have no default.

use std::fs;
use std::path::{Path, PathBuf};

use listings_model::{ModelError, PriceRange, RowCountBounds};
use listings_validate::{KlConvention, ValidationParams};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "listings.toml";
/// Store root used when neither flag nor file names one.
pub const DEFAULT_STORE_ROOT: &str = "artifacts";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("`{flag}` is required (pass it or set `{key}` in {DEFAULT_CONFIG_FILE})")]
    Missing { flag: &'static str, key: &'static str },
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error("kl_threshold must be a positive number, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
    pub clean: CleanConfig,
    pub validate: ValidateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub kl_threshold: Option<f64>,
    pub min_rows: Option<usize>,
    pub max_rows: Option<usize>,
    /// Additive smoothing for KL divergence; 0 keeps the standard convention.
    pub kl_smoothing: Option<f64>,
}

impl Config {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load `explicit`, or `listings.toml` in `dir` if it exists, or defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            Self::from_file(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    pub fn store_root(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.store.root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_ROOT))
    }

    /// Price window for the cleaning stage.
    pub fn clean_price(&self, min: Option<f64>, max: Option<f64>) -> Result<PriceRange> {
        price_range(
            min.or(self.clean.min_price),
            max.or(self.clean.max_price),
            ("clean.min_price", "clean.max_price"),
        )
    }

    pub fn validation_params(&self, flags: &ValidateFlags) -> Result<ValidationParams> {
        let settings = &self.validate;
        let price = price_range(
            flags.min_price.or(settings.min_price),
            flags.max_price.or(settings.max_price),
            ("validate.min_price", "validate.max_price"),
        )?;
        let kl_threshold = flags
            .kl_threshold
            .or(settings.kl_threshold)
            .ok_or(ConfigError::Missing {
                flag: "--kl-threshold",
                key: "validate.kl_threshold",
            })?;
        if !(kl_threshold.is_finite() && kl_threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(kl_threshold));
        }
        let rows = RowCountBounds::new(
            settings.min_rows.unwrap_or(RowCountBounds::DEFAULT_MIN),
            settings.max_rows.unwrap_or(RowCountBounds::DEFAULT_MAX),
        )?;
        let convention = KlConvention::from_pseudocount(settings.kl_smoothing.unwrap_or(0.0));
        Ok(ValidationParams::new(price, kl_threshold)
            .with_rows(rows)
            .with_kl_convention(convention))
    }
}

/// Validation settings that can come from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateFlags {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub kl_threshold: Option<f64>,
}

fn price_range(
    min: Option<f64>,
    max: Option<f64>,
    (min_key, max_key): (&'static str, &'static str),
) -> Result<PriceRange> {
    let min = min.ok_or(ConfigError::Missing {
        flag: "--min-price",
        key: min_key,
    })?;
    let max = max.ok_or(ConfigError::Missing {
        flag: "--max-price",
        key: max_key,
    })?;
    Ok(PriceRange::new(min, max)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        Config::parse(text, Path::new("listings.toml")).unwrap()
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse(""), Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("[clean]\nmin = 1.0\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn store_root_precedence() {
        let config = parse("[store]\nroot = \"/data/artifacts\"\n");
        assert_eq!(config.store_root(None), PathBuf::from("/data/artifacts"));
        assert_eq!(
            config.store_root(Some(Path::new("local"))),
            PathBuf::from("local")
        );
        assert_eq!(
            Config::default().store_root(None),
            PathBuf::from(DEFAULT_STORE_ROOT)
        );
    }
}
