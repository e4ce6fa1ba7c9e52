//! Simple moving average model

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};
use agri_math::moving_averages::{rolling_means, trailing_mean};

/// Simple Moving Average model
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

/// Trained Simple Moving Average model
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    /// Name of the model
    name: String,
    /// Mean of the last window
    next: f64,
    /// Window mean ending at each point
    fitted: Vec<Option<f64>>,
}

impl MovingAverage {
    /// Create a new Simple Moving Average model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Simple Moving Average (window={})", window),
            window,
        })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl ForecastModel for MovingAverage {
    type Trained = TrainedMovingAverage;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.len() < self.window {
            return Err(ForecastError::InvalidParameter(format!(
                "Period length {} exceeds the {} available data points",
                self.window,
                data.len()
            )));
        }

        let next = trailing_mean(data, self.window)?;
        let fitted = rolling_means(data, self.window)?;

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            next,
            fitted,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
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
