//! Error types for the demand_forecast crate

use agri_math::MathError;
use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Input failed schema validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Model parameter out of range for the data it is applied to
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Not enough history to fit a model
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Malformed imported data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from numeric primitives
    #[error("Math error: {0}")]
    MathError(#[from] MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}
