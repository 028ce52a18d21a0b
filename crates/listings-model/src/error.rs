use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown borough: {0}")]
    UnknownBorough(String),
    #[error("unknown listing column: {0}")]
    UnknownColumn(String),
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: f64, max: f64 },
    #[error("price bound is not a finite number: {0}")]
    NonFinitePrice(f64),
    #[error("invalid row count bounds: {min} must be lower than {max}")]
    InvalidRowBounds { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
