//! Schema checks for forecast requests

use crate::config::ForecastDefaults;
use crate::engine::ForecastInput;
use crate::error::{ForecastError, Result};
use crate::models::ForecastMethod;

impl ForecastInput {
    /// Reject structurally invalid requests using the default bounds
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&ForecastDefaults::default())
    }

    /// Reject structurally invalid requests, reporting every violation
    pub fn validate_with(&self, bounds: &ForecastDefaults) -> Result<()> {
        let mut errors = Vec::new();

        if self.product_name.trim().is_empty() {
            errors.push("productName: product name is required".to_string());
        }

        if self.historical_demand.len() < bounds.min_history {
            errors.push(format!(
                "historicalDemand: at least {} data points are required, got {}",
                bounds.min_history,
                self.historical_demand.len()
            ));
        }

        for (i, point) in self.historical_demand.iter().enumerate() {
            if point.period.trim().is_empty() {
                errors.push(format!("historicalDemand[{}].period: period is required", i));
            }
            if !point.demand.is_finite() || point.demand < 0.0 {
                errors.push(format!(
                    "historicalDemand[{}].demand: demand must be a non-negative number",
                    i
                ));
            }
        }

        match self.method {
            ForecastMethod::Sma => {
                let period = self.period_length.unwrap_or(bounds.period_length);
                if period < bounds.min_period_length || period > bounds.max_period_length {
                    errors.push(format!(
                        "periodLength: must be between {} and {}, got {}",
                        bounds.min_period_length, bounds.max_period_length, period
                    ));
                } else if period > self.historical_demand.len() {
                    errors.push(format!(
                        "periodLength: {} exceeds the {} historical data points",
                        period,
                        self.historical_demand.len()
                    ));
                }
            }
            ForecastMethod::Exponential => {
                let alpha = self.smoothing_factor.unwrap_or(bounds.smoothing_factor);
                if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                    errors.push(format!(
                        "smoothingFactor: must be between 0 and 1, got {}",
                        alpha
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ForecastError::ValidationError(errors.join("; ")))
        }
    }
}
