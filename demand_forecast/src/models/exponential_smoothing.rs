//! Exponential smoothing model for demand forecasting

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};
use agri_math::forecasting::smoothed_series;

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
    /// One-step-ahead smoothed value for each point
    fitted: Vec<Option<f64>>,
    /// `alpha * last actual + (1 - alpha) * last smoothed`
    next: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model, `alpha` in `[0, 1]`
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ForecastError::InvalidParameter(format!(
                "Smoothing factor must be between 0 and 1, got {}",
                alpha
            )));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Get the smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Empty demand series".to_string(),
            ));
        }

        let (series, next) = smoothed_series(data, self.alpha)?;

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            alpha: self.alpha,
            fitted: series.into_iter().map(Some).collect(),
            next,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedExponentialSmoothing {
    /// Get the smoothing parameter the model was trained with
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self) -> f64 {
        self.next
    }

    fn predict(&self) -> &[Option<f64>] {
        &self.fitted
    }

    fn name(&self) -> &str {
        &self.name
    }
}
