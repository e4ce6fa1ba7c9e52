//! # Agri Math
//!
//! Numeric primitives shared by the analysis engines.
//! This crate provides the windowed averages, the exponential smoothing
//! recurrence and the accuracy metrics used to score fitted series.

use thiserror::Error;

pub mod accuracy;
pub mod forecasting;
pub mod moving_averages;

/// Errors that can occur in numeric calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for numeric operations
pub type Result<T> = std::result::Result<T, MathError>;
