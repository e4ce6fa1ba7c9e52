//! Forecasting models for demand series

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod exponential_smoothing;
pub mod moving_average;

/// Forecasting method selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastMethod {
    /// Simple moving average
    Sma,
    /// Simple exponential smoothing
    Exponential,
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastMethod::Sma => write!(f, "sma"),
            ForecastMethod::Exponential => write!(f, "exponential"),
        }
    }
}

/// Model fitted to a demand series
pub trait TrainedForecastModel: Debug {
    /// Forecast for the period after the training data
    fn forecast(&self) -> f64;

    /// Retrospective fitted value for each training point, `None` where the
    /// model has no estimate
    fn predict(&self) -> &[Option<f64>];

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a demand series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Fit the model to `data`, oldest value first
    fn train(&self, data: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
